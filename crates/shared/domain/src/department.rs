use crate::constants::ALL_DEPARTMENTS;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Municipal secretariat owning a family of module types.
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
pub enum Department {
    Saude,
    Educacao,
    AssistenciaSocial,
    Agricultura,
    Cultura,
    Esportes,
    Habitacao,
    MeioAmbiente,
    ObrasPublicas,
    PlanejamentoUrbano,
    SegurancaPublica,
    ServicosPublicos,
    Turismo,
}

impl Department {
    /// Stable department code, e.g. `"ASSISTENCIA_SOCIAL"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }
}

bitflags! {
    /// A set of enabled departments.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DepartmentSet: u32 {
        const SAUDE = 1 << 0;
        const EDUCACAO = 1 << 1;
        const ASSISTENCIA_SOCIAL = 1 << 2;
        const AGRICULTURA = 1 << 3;
        const CULTURA = 1 << 4;
        const ESPORTES = 1 << 5;
        const HABITACAO = 1 << 6;
        const MEIO_AMBIENTE = 1 << 7;
        const OBRAS_PUBLICAS = 1 << 8;
        const PLANEJAMENTO_URBANO = 1 << 9;
        const SEGURANCA_PUBLICA = 1 << 10;
        const SERVICOS_PUBLICOS = 1 << 11;
        const TURISMO = 1 << 12;

        const ALL = (1 << 13) - 1;
    }
}

impl DepartmentSet {
    /// Whether `department` is part of this set.
    #[must_use]
    pub fn includes(self, department: Department) -> bool {
        self.contains(Self::from(department))
    }

    /// Departments of this set, in declaration order.
    pub fn departments(self) -> impl Iterator<Item = Department> {
        <Department as strum::IntoEnumIterator>::iter().filter(move |d| self.includes(*d))
    }
}

impl Default for DepartmentSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Department> for DepartmentSet {
    fn from(department: Department) -> Self {
        match department {
            Department::Saude => Self::SAUDE,
            Department::Educacao => Self::EDUCACAO,
            Department::AssistenciaSocial => Self::ASSISTENCIA_SOCIAL,
            Department::Agricultura => Self::AGRICULTURA,
            Department::Cultura => Self::CULTURA,
            Department::Esportes => Self::ESPORTES,
            Department::Habitacao => Self::HABITACAO,
            Department::MeioAmbiente => Self::MEIO_AMBIENTE,
            Department::ObrasPublicas => Self::OBRAS_PUBLICAS,
            Department::PlanejamentoUrbano => Self::PLANEJAMENTO_URBANO,
            Department::SegurancaPublica => Self::SEGURANCA_PUBLICA,
            Department::ServicosPublicos => Self::SERVICOS_PUBLICOS,
            Department::Turismo => Self::TURISMO,
        }
    }
}

impl From<&str> for DepartmentSet {
    fn from(s: &str) -> Self {
        match s {
            ALL_DEPARTMENTS | "all" => Self::ALL,
            code => Department::from_str(code).map_or_else(|_| Self::empty(), Self::from),
        }
    }
}

impl From<u32> for DepartmentSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl FromIterator<Department> for DepartmentSet {
    fn from_iter<I: IntoIterator<Item = Department>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, d| set | Self::from(d))
    }
}

impl Serialize for DepartmentSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if *self == Self::ALL {
            return serializer.serialize_str(ALL_DEPARTMENTS);
        }
        serializer.collect_seq(self.departments().map(Department::code))
    }
}

/// Accepts `"*"`, a single code, or a list of codes. Unknown codes are rejected.
impl<'de> Deserialize<'de> for DepartmentSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            One(String),
            Many(Vec<String>),
        }

        let codes = match Repr::deserialize(deserializer)? {
            Repr::One(code) => vec![code],
            Repr::Many(codes) => codes,
        };

        codes.iter().try_fold(Self::empty(), |set, code| {
            let parsed = Self::from(code.trim());
            if parsed.is_empty() {
                Err(serde::de::Error::custom(format!("unknown department code '{code}'")))
            } else {
                Ok(set | parsed)
            }
        })
    }
}
