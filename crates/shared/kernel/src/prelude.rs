pub use crate::dispatch::{Dispatch, DispatchError, ProtocolDispatcher};
pub use crate::engine::{LifecycleOptions, SchemaHandler};
pub use crate::entity::{DepartmentEntity, FormData};
pub use crate::error::{LifecycleError, LifecycleErrorExt};
pub use crate::handler::LifecycleHandler;
pub use crate::registry::{Registry, RegistryBuilder, RegistryError, RegistryStats};
pub use crate::schema::{
    Condition, DepartmentManifest, DerivedField, FieldDefault, FieldSpec, FieldType, KindSchema,
    Rule, Uniqueness,
};
pub use crate::status::{LifecycleStage, StatusVocabulary};
pub use crate::validation::ValidationReport;
pub use digiurban_domain::{Department, DepartmentSet, ModuleType};
pub use digiurban_store::{EntityStore, MemoryStore};
