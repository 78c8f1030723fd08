//! Record kinds and field names shared by the store and the lifecycle engine.

/// Store kind holding citizen records.
pub const CITIZEN: &str = "citizen";

pub const ID: &str = "id";
pub const MODULE_TYPE: &str = "moduleType";
pub const PROTOCOL_ID: &str = "protocolId";
pub const CITIZEN_ID: &str = "citizenId";
pub const STATUS: &str = "status";
pub const IS_ACTIVE: &str = "isActive";
pub const CREATED_AT: &str = "createdAt";
pub const UPDATED_AT: &str = "updatedAt";
pub const ACTIVATED_AT: &str = "activatedAt";
pub const CANCELLED_AT: &str = "cancelledAt";

/// Fields owned by the lifecycle; forms and patches never write them directly.
pub const RESERVED_FIELDS: &[&str] = &[
    ID,
    MODULE_TYPE,
    PROTOCOL_ID,
    CITIZEN_ID,
    STATUS,
    IS_ACTIVE,
    CREATED_AT,
    UPDATED_AT,
    ACTIVATED_AT,
    CANCELLED_AT,
];

/// Wildcard accepted wherever a list of departments is configured.
pub const ALL_DEPARTMENTS: &str = "*";
