use crate::department::Department;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Service module selecting which department entity kind governs a protocol.
///
/// The serialized form is the SCREAMING_SNAKE code carried by incoming requests
/// (`"SOLICITACAO_DOCUMENTO_ESCOLAR"`). Strings are translated to this tag once, at the edge.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleType {
    // Saude
    AtendimentosSaude,
    AgendamentosMedicos,
    TransportePacientes,
    CadastroPaciente,
    GestaoAcs,

    // Educacao
    AtendimentosEducacao,
    SolicitacaoDocumentoEscolar,
    RegistroOcorrenciaEscolar,
    TransporteEscolar,
    TransferenciaEscolar,
    CalendarioEscolar,

    // Assistencia social
    CadastroUnico,
    AgendamentoAtendimentoSocial,
    SolicitacaoBeneficio,
    EntregaEmergencial,
    VisitasDomiciliares,

    // Agricultura
    AtendimentosAgricultura,
    CadastroProdutor,
    InscricaoCursoRural,

    // Habitacao
    InscricaoProgramaHabitacional,
    SolicitacaoAuxilioAluguel,
    ConsultaProgramasHabitacionais,

    // Cultura
    ReservaEspacoCultural,
    ProjetoCultural,
    AgendaEventosCulturais,

    // Esportes
    InscricaoEscolinha,
    ReservaEspacoEsportivo,
    AgendaEventosEsportivos,

    // Meio ambiente
    AtendimentosMeioAmbiente,
    LicencaAmbiental,
    DenunciaAmbiental,
    AutorizacaoPodaCorte,

    // Obras publicas
    AtendimentosObras,
    SolicitacaoReparoVia,
    VistoriaTecnicaObras,
    AcompanhamentoObras,

    // Planejamento urbano
    AtendimentosPlanejamento,
    AlvaraConstrucao,
    SolicitacaoCertidao,
    DenunciaConstrucaoIrregular,
    ConsultasPublicas,

    // Seguranca publica
    AtendimentosSeguranca,
    RegistroOcorrencia,
    SolicitacaoRonda,
    DenunciaAnonima,
    EstatisticasSeguranca,

    // Servicos publicos
    AtendimentosServicosPublicos,
    SolicitacaoPoda,
    ColetaEspecial,
    SolicitacaoCapina,
    RegistroProblemaComFoto,

    // Turismo
    AtendimentosTurismo,
    CadastroGuiaTuristico,
    CadastroEstabelecimentoTuristico,
    MapaTuristico,
}

impl ModuleType {
    /// Stable module code, e.g. `"GESTAO_ACS"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn department(self) -> Department {
        match self {
            Self::AtendimentosSaude
            | Self::AgendamentosMedicos
            | Self::TransportePacientes
            | Self::CadastroPaciente
            | Self::GestaoAcs => Department::Saude,
            Self::AtendimentosEducacao
            | Self::SolicitacaoDocumentoEscolar
            | Self::RegistroOcorrenciaEscolar
            | Self::TransporteEscolar
            | Self::TransferenciaEscolar
            | Self::CalendarioEscolar => Department::Educacao,
            Self::CadastroUnico
            | Self::AgendamentoAtendimentoSocial
            | Self::SolicitacaoBeneficio
            | Self::EntregaEmergencial
            | Self::VisitasDomiciliares => Department::AssistenciaSocial,
            Self::AtendimentosAgricultura | Self::CadastroProdutor | Self::InscricaoCursoRural => {
                Department::Agricultura
            },
            Self::InscricaoProgramaHabitacional
            | Self::SolicitacaoAuxilioAluguel
            | Self::ConsultaProgramasHabitacionais => Department::Habitacao,
            Self::ReservaEspacoCultural | Self::ProjetoCultural | Self::AgendaEventosCulturais => {
                Department::Cultura
            },
            Self::InscricaoEscolinha
            | Self::ReservaEspacoEsportivo
            | Self::AgendaEventosEsportivos => Department::Esportes,
            Self::AtendimentosMeioAmbiente
            | Self::LicencaAmbiental
            | Self::DenunciaAmbiental
            | Self::AutorizacaoPodaCorte => Department::MeioAmbiente,
            Self::AtendimentosObras
            | Self::SolicitacaoReparoVia
            | Self::VistoriaTecnicaObras
            | Self::AcompanhamentoObras => Department::ObrasPublicas,
            Self::AtendimentosPlanejamento
            | Self::AlvaraConstrucao
            | Self::SolicitacaoCertidao
            | Self::DenunciaConstrucaoIrregular
            | Self::ConsultasPublicas => Department::PlanejamentoUrbano,
            Self::AtendimentosSeguranca
            | Self::RegistroOcorrencia
            | Self::SolicitacaoRonda
            | Self::DenunciaAnonima
            | Self::EstatisticasSeguranca => Department::SegurancaPublica,
            Self::AtendimentosServicosPublicos
            | Self::SolicitacaoPoda
            | Self::ColetaEspecial
            | Self::SolicitacaoCapina
            | Self::RegistroProblemaComFoto => Department::ServicosPublicos,
            Self::AtendimentosTurismo
            | Self::CadastroGuiaTuristico
            | Self::CadastroEstabelecimentoTuristico
            | Self::MapaTuristico => Department::Turismo,
        }
    }

    /// Informational services publish content only and never create a department entity.
    #[must_use]
    pub const fn is_informational(self) -> bool {
        matches!(
            self,
            Self::CalendarioEscolar
                | Self::ConsultaProgramasHabitacionais
                | Self::AgendaEventosCulturais
                | Self::AgendaEventosEsportivos
                | Self::AcompanhamentoObras
                | Self::ConsultasPublicas
                | Self::EstatisticasSeguranca
                | Self::RegistroProblemaComFoto
                | Self::MapaTuristico
        )
    }
}
