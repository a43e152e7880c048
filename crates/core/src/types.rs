/// Product identifiers are assigned by the service as integers.
pub type DbId = i64;
