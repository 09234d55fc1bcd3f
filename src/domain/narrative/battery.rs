//! The fixed DNA question battery, in presentation order.
//!
//! Tuples are `(prompt text, audio reference, life domain)`.

use super::taxonomy::LifeDomain::{self, *};

pub(super) const DNA_BATTERY: &[(&str, &str, LifeDomain)] = &[
    // Identidade
    ("Olá. Bem-vindo ao DNA, Deep Narrative Analysis. Uma jornada interativa de autoanálise através da sua narrativa. Vamos começar.", "/audio/000.mp3", Identity),
    ("Quem é você além dos crachás que carrega?", "/audio/001.mp3", Identity),
    ("Se sua vida fosse um livro, qual seria o título atual deste capítulo?", "/audio/002.mp3", Identity),
    ("Que versão anterior de você ainda habita dentro da atual?", "/audio/003.mp3", Identity),
    ("Qual parte de você permanece constante, independente do contexto?", "/audio/004.mp3", Identity),
    ("Que papel você interpreta que não se alinha com quem realmente é?", "/audio/005.mp3", Identity),
    ("Se pudesse reescrever uma página de sua história, qual seria e como a modificaria?", "/audio/006.mp3", Identity),
    ("Qual verdade sobre você é simultaneamente falsa?", "/audio/007.mp3", Identity),
    ("Em que momento você é mais autêntico e também mais performático?", "/audio/008.mp3", Identity),
    ("O que você evita admitir sobre si mesmo?", "/audio/009.mp3", Identity),
    ("O que as pessoas mais erram sobre quem você é?", "/audio/010.mp3", Identity),
    ("Como você descreveria seu 'eu futuro' em três palavras?", "/audio/011.mp3", Identity),
    ("O que sua intimidade silenciosa diria sobre você?", "/audio/012.mp3", Identity),

    // Valores
    ("O que permaneceria intocável se tudo ruísse ao redor?", "/audio/013.mp3", Values),
    ("Qual princípio você defende mesmo quando custa algo a você?", "/audio/014.mp3", Values),
    ("O que você se recusa a negociar, mesmo quando seria vantajoso?", "/audio/015.mp3", Values),
    ("Quais valores seus foram herdados e quais foram conquistados?", "/audio/016.mp3", Values),
    ("Que valor você admira nos outros mas luta para incorporar?", "/audio/017.mp3", Values),
    ("Em que situação seus valores entram em conflito entre si?", "/audio/018.mp3", Values),
    ("Qual valor você defende publicamente mas viola em privado?", "/audio/019.mp3", Values),
    ("O que você valoriza que também te aprisiona?", "/audio/020.mp3", Values),
    ("Como seus valores influenciam sua rotina diária?", "/audio/021.mp3", Values),
    ("Que valor você priorizaria se fosse seu mentor de 20 anos atrás?", "/audio/022.mp3", Values),
    ("Qual valor seu mais surpreende quando se olha no espelho?", "/audio/023.mp3", Values),
    ("Que princípio seu tem sido testado recentemente — e como reagiu?", "/audio/024.mp3", Values),

    // CrencasSobreSi
    ("Que história interna você conta sobre 'ser suficiente'?", "/audio/025.mp3", BeliefsAboutSelf),
    ("Que limite autoimposto você suspeita que seja ilusório?", "/audio/026.mp3", BeliefsAboutSelf),
    ("O que você acredita ser incapaz de fazer que pode ser apenas medo?", "/audio/027.mp3", BeliefsAboutSelf),
    ("Que qualidade você tem dificuldade em reconhecer em si mesmo?", "/audio/028.mp3", BeliefsAboutSelf),
    ("Qual habilidade sua é tão natural que você subestima seu valor?", "/audio/029.mp3", BeliefsAboutSelf),
    ("Que potencial em você permanece adormecido por autocensura?", "/audio/030.mp3", BeliefsAboutSelf),
    ("Em que aspecto você é simultaneamente seu maior aliado e sabotador?", "/audio/031.mp3", BeliefsAboutSelf),
    ("Que verdade sobre si mesmo você sabe intelectualmente, mas não sente emocionalmente?", "/audio/032.mp3", BeliefsAboutSelf),
    ("Que narrativa sua sobre 'não merecimento' você carrega de longos anos?", "/audio/033.mp3", BeliefsAboutSelf),
    ("Como você explicaria seu 'eu mais confiante' a si mesmo?", "/audio/034.mp3", BeliefsAboutSelf),
    ("Onde seu perfeccionismo já arruinou um momento importante?", "/audio/035.mp3", BeliefsAboutSelf),
    ("Que fase da vida foi a primeira em que você se sentiu 'totalmente você'?", "/audio/036.mp3", BeliefsAboutSelf),

    // Relacionamentos
    ("O que o mundo parece estar lhe dizendo repetidamente?", "/audio/037.mp3", Relationships),
    ("Qual padrão você percebe nas pessoas que entram em sua vida?", "/audio/038.mp3", Relationships),
    ("Que regra não escrita você acredita que governa as interações humanas?", "/audio/039.mp3", Relationships),
    ("O que você espera dos outros sem nunca comunicar explicitamente?", "/audio/040.mp3", Relationships),
    ("Que tipo de mundo você tenta criar no seu espaço de influência?", "/audio/041.mp3", Relationships),
    ("Qual crença sobre a realidade você sustenta mesmo contra evidências?", "/audio/042.mp3", Relationships),
    ("Em que sentido o mundo é simultaneamente justo e injusto para você?", "/audio/043.mp3", Relationships),
    ("Que verdade sobre a natureza humana você aceita mas deseja que fosse diferente?", "/audio/044.mp3", Relationships),
    ("Que lição o mundo te ensinou da forma mais brusca?", "/audio/045.mp3", Relationships),
    ("O que você oferece ao mundo que inventou dentro de si?", "/audio/046.mp3", Relationships),
    ("Em quem você confia cegamente — e por quê?", "/audio/047.mp3", Relationships),
    ("Qual história coletiva (cultural/familiar) você carrega como verdade não questionada?", "/audio/048.mp3", Relationships),

    // Trajetoria
    ("Qual memória ainda arde quando você a visita?", "/audio/049.mp3", Trajectory),
    ("Que evento dividiu sua vida em 'antes' e 'depois'?", "/audio/050.mp3", Trajectory),
    ("Qual foi a decepção que mais moldou quem você é hoje?", "/audio/051.mp3", Trajectory),
    ("Que dor você normalizou até esquecê-la como dor?", "/audio/052.mp3", Trajectory),
    ("Qual foi seu maior fracasso que, em retrospecto, foi um redirecionamento necessário?", "/audio/053.mp3", Trajectory),
    ("Que momento de conexão humana redefiniu sua compreensão de relacionamentos?", "/audio/054.mp3", Trajectory),
    ("Qual experiência foi simultaneamente a pior e a melhor coisa que te aconteceu?", "/audio/055.mp3", Trajectory),
    ("Que trauma você transformou em força, mas que ainda carrega vestígios de ferida?", "/audio/056.mp3", Trajectory),
    ("Que infância você cultiva em você hoje?", "/audio/057.mp3", Trajectory),
    ("Qual limite que você quebrou ainda reverbera em seus dias?", "/audio/058.mp3", Trajectory),
    ("Que silêncio na sua história precisa ser contado?", "/audio/059.mp3", Trajectory),
    ("Qual pessoa que você foi e não reconhece mais?", "/audio/060.mp3", Trajectory),

    // Emocoes
    ("Qual emoção você encontra mais difícil de expressar ou admitir?", "/audio/061.mp3", Emotions),
    ("O que desencadeia sua resposta emocional mais intensa?", "/audio/062.mp3", Emotions),
    ("Como você se comporta quando está emocionalmente sobrecarregado?", "/audio/063.mp3", Emotions),
    ("Que emoção você mascara com outra mais aceitável?", "/audio/064.mp3", Emotions),
    ("Qual sentimento você associa ao seu 'melhor eu'?", "/audio/065.mp3", Emotions),
    ("Como você aprendeu a lidar com decepções?", "/audio/066.mp3", Emotions),
    ("Em que situações sua calma exterior esconde turbulência interior?", "/audio/067.mp3", Emotions),
    ("Qual emoção você teme que, se plenamente sentida, poderia te consumir?", "/audio/068.mp3", Emotions),
    ("Em que momentos você chora, mesmo sozinho?", "/audio/069.mp3", Emotions),
    ("Qual mágoa ainda ativa seu corpo quando lembrada?", "/audio/070.mp3", Emotions),
    ("Como você celebra suas conquistas internamente?", "/audio/071.mp3", Emotions),
    ("O que faz seu coração acelerar com alegria genuína?", "/audio/072.mp3", Emotions),

    // Conflitos
    ("Cite uma escolha que grita 'isso foi 100% eu'.", "/audio/073.mp3", Conflicts),
    ("Como você toma decisões quando a análise racional e a intuição divergem?", "/audio/074.mp3", Conflicts),
    ("Qual é seu processo para resolver problemas complexos?", "/audio/075.mp3", Conflicts),
    ("Que tipo de decisões você tende a adiar ou evitar?", "/audio/076.mp3", Conflicts),
    ("Como você lida com incertezas quando precisa agir?", "/audio/077.mp3", Conflicts),
    ("Qual é sua relação com arrependimento em decisões passadas?", "/audio/078.mp3", Conflicts),
    ("Quando sua intuição provou estar simultaneamente errada e certa?", "/audio/079.mp3", Conflicts),
    ("Em que tipo de decisão você é excessivamente cuidadoso e impulsivo ao mesmo tempo?", "/audio/080.mp3", Conflicts),
    ("Que decisão mudou o curso da sua vida sem aviso?", "/audio/081.mp3", Conflicts),
    ("Como você decide quando está emocionalmente abalado?", "/audio/082.mp3", Conflicts),
    ("Qual risco você evitou que arrepende hoje?", "/audio/083.mp3", Conflicts),
    ("Que escolha futura você já antevê com ansiedade e esperança ao mesmo tempo?", "/audio/084.mp3", Conflicts),

    // Futuro
    ("Qual incoerência você admite mas ainda não resolve?", "/audio/085.mp3", Future),
    ("Que feedback recebido sobre você inicialmente rejeitou, mas depois reconheceu como verdade?", "/audio/086.mp3", Future),
    ("Qual aspecto de si mesmo você tem dificuldade em enxergar claramente?", "/audio/087.mp3", Future),
    ("Em que área sua autopercepção mais diverge de como os outros te veem?", "/audio/088.mp3", Future),
    ("Qual padrão autodestrutivo você só percebe em retrospecto?", "/audio/089.mp3", Future),
    ("Que conselho você frequentemente dá aos outros mas raramente segue?", "/audio/090.mp3", Future),
    ("Qual qualidade sua é simultaneamente sua maior força e fraqueza?", "/audio/091.mp3", Future),
    ("Qual crença você defende logicamente, mas emocionalmente rejeita?", "/audio/092.mp3", Future),
    ("Em que momento seu comportamento surpreende quem te conhece?", "/audio/093.mp3", Future),
    ("O que você se orgulha de esconder de si mesmo?", "/audio/094.mp3", Future),
    ("Como o seu humor muda em silêncio?", "/audio/095.mp3", Future),
    ("Que parte de você vive em negação mesmo quando surge clara?", "/audio/096.mp3", Future),

    // SentidoEProposito
    ("Se o medo tivesse voz, o que ele sussurra no seu ouvido?", "/audio/097.mp3", MeaningAndPurpose),
    ("Que legado seria inaceitável deixar inacabado?", "/audio/098.mp3", MeaningAndPurpose),
    ("O que você deseja secretamente, mas hesita em admitir até para si mesmo?", "/audio/099.mp3", MeaningAndPurpose),
    ("Qual aspiração você abandonou e por quê?", "/audio/100.mp3", MeaningAndPurpose),
    ("Que tipo de fracasso você teme mais do que admite?", "/audio/101.mp3", MeaningAndPurpose),
    ("Que sonho você adiou dizendo que 'um dia fará', mas que teme nunca tentar?", "/audio/102.mp3", MeaningAndPurpose),
    ("O que você mais deseja que também mais teme alcançar?", "/audio/103.mp3", MeaningAndPurpose),
    ("Que sucesso te assustaria mais do que um fracasso visível?", "/audio/104.mp3", MeaningAndPurpose),
    ("Em qual momento você se pegou pensando 'isso não era pra mim'?", "/audio/105.mp3", MeaningAndPurpose),
    ("Quando foi a última vez que se sentiu verdadeiramente orgulhoso de si?", "/audio/106.mp3", MeaningAndPurpose),
    ("O que você quer muito e ao mesmo tempo teme que aconteça de verdade?", "/audio/107.mp3", MeaningAndPurpose),
    ("Qual mudança de vida você sabe que precisa fazer, mas ainda não começou?", "/audio/108.mp3", MeaningAndPurpose),
];
