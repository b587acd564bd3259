mod reference;

pub use self::reference::*;

/// Database information to use to create a client
pub enum DatabaseInfo {
    /// Auto-detect the database in use
    Auto,
    /// Use the mock database
    Reference,
    /// Create an empty testing database
    Test(String),
}

/// Database
#[derive(Clone)]
pub enum Database {
    /// Mock database
    Reference(ReferenceDb),
}

impl DatabaseInfo {
    /// Create a database client from the given database information
    pub async fn connect(self) -> Result<Database, String> {
        Ok(match self {
            DatabaseInfo::Auto | DatabaseInfo::Reference => {
                Database::Reference(ReferenceDb::default())
            }
            // Every test gets its own empty reference database
            DatabaseInfo::Test(_) => Database::Reference(ReferenceDb::default()),
        })
    }
}
