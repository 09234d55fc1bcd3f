//! Synthesis Generator - renders the final report from a completed profile.
//!
//! The report is markdown-flavoured Portuguese text with a fixed section
//! order. The `Gerado em:` line is the only time-dependent line; everything
//! else is a pure function of the profile and the options.

use crate::domain::foundation::Timestamp;

use super::profile::NarrativeProfile;
use super::scores::ScoreTable;
use super::taxonomy::Dimension;

/// Conflict notes shown when no option overrides it.
pub const DEFAULT_MAX_CONFLICT_NOTES: usize = 5;

const RULE: &str = "=========================================";
const SECTION_BREAK: &str = "---\n\n";

/// Prefix of the single time-dependent line.
pub const GENERATED_AT_PREFIX: &str = "Gerado em: ";

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Upper bound on listed conflict notes; the count is always complete.
    pub max_conflict_notes: usize,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            max_conflict_notes: DEFAULT_MAX_CONFLICT_NOTES,
        }
    }
}

/// Renders synthesis reports.
#[derive(Debug, Clone, Default)]
pub struct SynthesisGenerator {
    options: SynthesisOptions,
}

impl SynthesisGenerator {
    pub fn new(options: SynthesisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> SynthesisOptions {
        self.options
    }

    /// Renders the report stamped with the current time.
    pub fn render(&self, profile: &NarrativeProfile) -> String {
        self.render_at(profile, Timestamp::now())
    }

    /// Renders the report stamped with `generated_at`.
    pub fn render_at(&self, profile: &NarrativeProfile, generated_at: Timestamp) -> String {
        let mut report = String::new();
        report.push_str(&self.generate_header(generated_at));
        report.push_str(&self.generate_letter(profile));
        report.push_str(SECTION_BREAK);
        report.push_str(&generate_ranking(
            "### HIERARQUIA DE VALORES (MODELO DE SCHWARTZ)",
            "A ressonância de cada valor em sua narrativa:",
            profile.schwartz_values(),
        ));
        report.push_str(SECTION_BREAK);
        report.push_str(&generate_ranking(
            "### HIERARQUIA DE MOTIVADORES",
            "Seus principais impulsionadores de ação:",
            profile.motivators(),
        ));
        report.push_str(SECTION_BREAK);
        report.push_str(&generate_ranking(
            "### PERFIL DE PERSONALIDADE (BIG FIVE)",
            "Seus traços de personalidade predominantes:",
            profile.big_five(),
        ));
        report.push_str(SECTION_BREAK);
        report.push_str(&self.generate_metaphors(profile));
        report.push_str(SECTION_BREAK);
        report.push_str(&self.generate_conflicts(profile));
        report.push_str(SECTION_BREAK);
        report.push_str(&generate_ranking(
            "### COBERTURA DE DOMÍNIOS DA VIDA",
            "Áreas exploradas durante a sessão:",
            profile.domain_coverage(),
        ));
        report.push_str(SECTION_BREAK);
        report.push_str(&self.generate_depth(profile));
        report.push_str(&format!("{}\nFIM DO RELATÓRIO\n{}\n", RULE, RULE));
        report
    }

    fn generate_header(&self, generated_at: Timestamp) -> String {
        format!(
            "{rule}\nRELATÓRIO DE ANÁLISE NARRATIVA PROFUNDA\n{rule}\n{prefix}{ts}\n\n",
            rule = RULE,
            prefix = GENERATED_AT_PREFIX,
            ts = generated_at.to_rfc3339()
        )
    }

    fn generate_letter(&self, profile: &NarrativeProfile) -> String {
        let mut section = String::from("### CARTA ESPELHO\n\n");
        section.push_str("Prezado(a) Analisado(a),\n\n");
        section.push_str(&format!(
            "Com base em sua jornada narrativa, emerge um perfil centrado no valor de **{}**, \
             impulsionado pelo motivador **{}** e marcado pelo traço **{}**.\n\n",
            profile.schwartz_values().dominant(),
            profile.motivators().dominant(),
            profile.big_five().dominant()
        ));
        section
    }

    fn generate_metaphors(&self, profile: &NarrativeProfile) -> String {
        let mut section = String::from("### METÁFORAS CENTRAIS\n\n");
        if profile.central_metaphors().is_empty() {
            section.push_str("Nenhuma detectada\n");
        } else {
            section.push_str(&format!("{}\n", profile.central_metaphors().join(", ")));
        }
        section.push_str(&format!(
            "Ocorrências de metáforas: {}\n\n",
            profile.metrics().metaphors
        ));
        section
    }

    fn generate_conflicts(&self, profile: &NarrativeProfile) -> String {
        let mut section = String::from("### CONTRADIÇÕES E CONFLITOS DE VALOR\n\n");
        section.push_str(&format!(
            "Contradições detectadas: {}\n\n",
            profile.metrics().contradictions
        ));

        let notes = profile.value_conflicts();
        if notes.is_empty() {
            section.push_str("Nenhum conflito detectado\n\n");
            return section;
        }

        let shown = notes.len().min(self.options.max_conflict_notes);
        for note in &notes[..shown] {
            section.push_str(&format!("- {}\n", note));
        }
        if notes.len() > shown {
            section.push_str(&format!("- (+{} conflitos não listados)\n", notes.len() - shown));
        }
        section.push('\n');
        section
    }

    fn generate_depth(&self, profile: &NarrativeProfile) -> String {
        format!(
            "### PROFUNDIDADE NARRATIVA\n\nProfundidade: {}\nFragmentos analisados: {}\n\n",
            profile.metrics().depth,
            profile.fragments_scored()
        )
    }
}

/// One ranked listing: descending score, ties in declared order.
fn generate_ranking<D: Dimension>(title: &str, intro: &str, table: &ScoreTable<D>) -> String {
    let mut section = format!("{}\n\n{}\n", title, intro);
    for (dimension, score) in table.ranked() {
        section.push_str(&format!("{}: {}\n", dimension, score));
    }
    section.push('\n');
    section
}

/// Renders a report with default options, stamped now.
pub fn render_synthesis(profile: &NarrativeProfile) -> String {
    SynthesisGenerator::default().render(profile)
}

/// Renders a report with default options and a fixed timestamp.
pub fn render_synthesis_at(profile: &NarrativeProfile, generated_at: Timestamp) -> String {
    SynthesisGenerator::default().render_at(profile, generated_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::narrative::{
        BigFiveTrait, FragmentScorer, LifeDomain, Motivator, Question, SchwartzValue,
    };

    fn fixed_time() -> Timestamp {
        // 2024-01-15T00:00:00Z
        Timestamp::from_unix_secs(1705276800).unwrap()
    }

    fn sample_profile() -> NarrativeProfile {
        let scorer = FragmentScorer::builtin().unwrap();
        let q = Question::new("Qual é o seu maior medo?", LifeDomain::Emotions, "");
        let p = scorer.score_fragment("Medo de perder a família, mas sigo firme", &q, &NarrativeProfile::new());
        let q = Question::new("Que imagem resume sua vida?", LifeDomain::Trajectory, "");
        scorer.score_fragment("Um farol no alto da montanha, com liberdade", &q, &p)
    }

    fn section<'a>(report: &'a str, title: &str) -> &'a str {
        let start = report.find(title).unwrap();
        let rest = &report[start..];
        let end = rest.find("---").unwrap_or(rest.len());
        &rest[..end]
    }

    #[test]
    fn empty_profile_uses_declared_order_fallback() {
        let report = render_synthesis_at(&NarrativeProfile::new(), fixed_time());

        assert!(report.contains(&format!("**{}**", SchwartzValue::SelfDirection)));
        assert!(report.contains(&format!("**{}**", Motivator::Purpose)));
        assert!(report.contains(&format!("**{}**", BigFiveTrait::Openness)));
        assert!(report.contains("Nenhuma detectada"));
        assert!(report.contains("Nenhum conflito detectado"));
        assert!(report.contains("Contradições detectadas: 0"));
        assert!(report.contains("Fragmentos analisados: 0"));
    }

    #[test]
    fn timestamp_is_isolated_to_one_line() {
        let profile = sample_profile();
        let a = render_synthesis_at(&profile, fixed_time());
        let b = render_synthesis_at(&profile, Timestamp::from_unix_secs(1800000000).unwrap());

        let stamped: Vec<_> = a.lines().filter(|l| l.starts_with(GENERATED_AT_PREFIX)).collect();
        assert_eq!(stamped, vec!["Gerado em: 2024-01-15T00:00:00Z"]);

        let differing: Vec<_> = a.lines().zip(b.lines()).filter(|(x, y)| x != y).collect();
        assert_eq!(differing.len(), 1);
        assert!(differing[0].0.starts_with(GENERATED_AT_PREFIX));
    }

    #[test]
    fn same_profile_and_time_render_identically() {
        let profile = sample_profile();
        assert_eq!(
            render_synthesis_at(&profile, fixed_time()),
            render_synthesis_at(&profile, fixed_time())
        );
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let report = render_synthesis_at(&sample_profile(), fixed_time());
        let titles = [
            "RELATÓRIO DE ANÁLISE NARRATIVA PROFUNDA",
            GENERATED_AT_PREFIX,
            "### CARTA ESPELHO",
            "### HIERARQUIA DE VALORES",
            "### HIERARQUIA DE MOTIVADORES",
            "### PERFIL DE PERSONALIDADE",
            "### METÁFORAS CENTRAIS",
            "### CONTRADIÇÕES E CONFLITOS DE VALOR",
            "### COBERTURA DE DOMÍNIOS DA VIDA",
            "### PROFUNDIDADE NARRATIVA",
            "FIM DO RELATÓRIO",
        ];
        let positions: Vec<_> = titles.iter().map(|t| report.find(t).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn listings_rank_by_score_with_declared_order_ties() {
        let report = render_synthesis_at(&sample_profile(), fixed_time());
        let values = section(&report, "### HIERARQUIA DE VALORES");
        let lines: Vec<_> = values.lines().filter(|l| l.contains(": ")).collect();

        // família hits Security and Benevolence, liberdade hits Self-Direction
        assert_eq!(lines[0], "Self-Direction: 1");
        assert_eq!(lines[1], "Security: 1");
        assert_eq!(lines[2], "Benevolence: 1");
        assert_eq!(lines[3], "Stimulation: 0");
        assert_eq!(lines.len(), SchwartzValue::ALL.len());
    }

    #[test]
    fn dominant_choices_follow_scores() {
        let report = render_synthesis_at(&sample_profile(), fixed_time());
        assert!(report.contains("motivador **Autonomy**"));
        assert!(report.contains("traço **Neuroticism**"));
    }

    #[test]
    fn metaphors_and_conflicts_are_reported() {
        let report = render_synthesis_at(&sample_profile(), fixed_time());
        assert!(report.contains("farol, montanha"));
        assert!(report.contains("Contradições detectadas: 1"));
        assert!(report.contains(
            "- Conflito potencial na resposta à pergunta: \"Qual é o seu maior medo?\""
        ));
        assert!(report.contains("Fragmentos analisados: 2"));
    }

    #[test]
    fn conflict_notes_are_bounded() {
        let scorer = FragmentScorer::builtin().unwrap();
        let mut profile = NarrativeProfile::new();
        for i in 0..7 {
            let q = Question::new(format!("Pergunta {}", i), LifeDomain::Conflicts, "");
            profile = scorer.score_fragment("quero, mas não consigo", &q, &profile);
        }

        let report = render_synthesis_at(&profile, fixed_time());
        assert!(report.contains("Contradições detectadas: 7"));
        assert_eq!(report.matches("- Conflito potencial").count(), DEFAULT_MAX_CONFLICT_NOTES);
        assert!(report.contains("(+2 conflitos não listados)"));

        let wide = SynthesisGenerator::new(SynthesisOptions { max_conflict_notes: 10 })
            .render_at(&profile, fixed_time());
        assert_eq!(wide.matches("- Conflito potencial").count(), 7);
        assert!(!wide.contains("não listados"));
    }
}
