//! Declarative table descriptors for the law/party schema.
//!
//! Five tables: laws (`T_LAW`), classification buckets (`M_CATEGORY`),
//! political parties (`M_PARTY`), and the two association tables linking
//! them (`T_LAW_CATEGORY_MAP`, `T_PARTY_LAW_ROLE`). Each descriptor lists
//! its columns with physical type, nullability, uniqueness, key membership
//! and a documentation comment; a single renderer turns a descriptor into
//! the `CREATE TABLE IF NOT EXISTS` statement the admin operations execute.
//!
//! Row lifecycle is owned by external loaders. This module is purely
//! declarative input for the admin operations and for the database's own
//! constraint checking.

pub mod enums;
pub mod models;

use enums::{EnumValues, JURISDICTION, LAW_TYPE, PROMOTION_ROLE, SUBMISSION_ROLE, VOTE_ROLE};

/// Physical column type, rendered to MariaDB/MySQL syntax
#[derive(Debug, Clone, Copy)]
pub enum ColumnType {
    /// Fixed-length character column, `CHAR(n)`
    Char(u16),
    /// Variable-length character column, `VARCHAR(n)`
    VarChar(u16),
    Text,
    Date,
    DateTime,
    /// Inline `ENUM(...)` whose code set comes from a shared vocabulary
    Enum(&'static EnumValues),
}

impl ColumnType {
    /// Render the type exactly as it appears in DDL
    pub fn sql(&self) -> String {
        match self {
            Self::Char(len) => format!("CHAR({len})"),
            Self::VarChar(len) => format!("VARCHAR({len})"),
            Self::Text => "TEXT".to_string(),
            Self::Date => "DATE".to_string(),
            Self::DateTime => "DATETIME".to_string(),
            Self::Enum(vocab) => {
                let codes: Vec<String> =
                    vocab.codes().map(|code| format!("'{code}'")).collect();
                format!("ENUM({})", codes.join(","))
            }
        }
    }
}

/// A foreign key reference to a parent table column
#[derive(Debug, Clone, Copy)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
}

/// One column of a table descriptor
#[derive(Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub unique: bool,
    pub primary_key: bool,
    pub references: Option<ForeignKey>,
    /// Documentation comment, rendered as a column `COMMENT`
    pub comment: &'static str,
}

impl ColumnDef {
    /// Nullable, non-unique column; refine with the builder methods below
    const fn new(name: &'static str, ty: ColumnType, comment: &'static str) -> Self {
        Self {
            name,
            ty,
            nullable: true,
            unique: false,
            primary_key: false,
            references: None,
            comment,
        }
    }

    const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Primary key columns are implicitly NOT NULL
    const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some(ForeignKey { table, column });
        self
    }
}

/// A table descriptor: name plus ordered column list
#[derive(Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    /// Render the CREATE TABLE statement for this table.
    ///
    /// `IF NOT EXISTS` keeps the create operation idempotent: existing
    /// tables are never dropped or altered.
    pub fn create_sql(&self) -> String {
        let mut body: Vec<String> = Vec::new();

        for col in self.columns {
            let mut line = format!("    {} {}", col.name, col.ty.sql());
            if !col.nullable {
                line.push_str(" NOT NULL");
            }
            if !col.comment.is_empty() {
                line.push_str(&format!(" COMMENT '{}'", col.comment));
            }
            body.push(line);
        }

        let pk: Vec<&str> = self
            .columns
            .iter()
            .filter(|col| col.primary_key)
            .map(|col| col.name)
            .collect();
        body.push(format!("    PRIMARY KEY ({})", pk.join(", ")));

        for col in self.columns.iter().filter(|col| col.unique) {
            body.push(format!("    UNIQUE ({})", col.name));
        }

        for col in self.columns {
            if let Some(fk) = col.references {
                body.push(format!(
                    "    FOREIGN KEY ({}) REFERENCES {} ({})",
                    col.name, fk.table, fk.column
                ));
            }
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
            self.name,
            body.join(",\n")
        )
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.name)
    }
}

/// Classification buckets (master data)
static M_CATEGORY: TableDef = TableDef {
    name: "M_CATEGORY",
    columns: &[
        ColumnDef::new(
            "id",
            ColumnType::Char(18),
            "internal id (snowflake or category_cd)",
        )
        .primary_key(),
        ColumnDef::new(
            "category_cd",
            ColumnType::VarChar(3),
            "e-Gov classification code, e.g. 030",
        )
        .not_null()
        .unique(),
        ColumnDef::new("name", ColumnType::VarChar(100), "classification name").not_null(),
        ColumnDef::new("description", ColumnType::Text, "what the bucket covers"),
    ],
};

/// Political parties (master data)
static M_PARTY: TableDef = TableDef {
    name: "M_PARTY",
    columns: &[
        ColumnDef::new("id", ColumnType::Char(18), "internal id (snowflake)").primary_key(),
        ColumnDef::new("name", ColumnType::VarChar(50), "party name")
            .not_null()
            .unique(),
        ColumnDef::new("short_name", ColumnType::VarChar(50), "abbreviated name"),
        ColumnDef::new("founded_on", ColumnType::Date, "date founded"),
        ColumnDef::new("dissolved_on", ColumnType::Date, "date dissolved"),
    ],
};

/// Legislative bills
static T_LAW: TableDef = TableDef {
    name: "T_LAW",
    columns: &[
        ColumnDef::new("id", ColumnType::Char(18), "internal id (snowflake)").primary_key(),
        ColumnDef::new("law_id", ColumnType::VarChar(20), "e-Gov lawId"),
        ColumnDef::new(
            "law_num",
            ColumnType::VarChar(50),
            "e-Gov lawNum, e.g. Act No. 75 of 2022",
        ),
        ColumnDef::new("law_type", ColumnType::Enum(&LAW_TYPE), "kind of law"),
        ColumnDef::new(
            "jurisdiction",
            ColumnType::Enum(&JURISDICTION),
            "level of government",
        ),
        ColumnDef::new("title", ColumnType::VarChar(200), "official title").not_null(),
        ColumnDef::new("promulgation_date", ColumnType::Date, "date promulgated"),
        ColumnDef::new("enforcement_date", ColumnType::Date, "date taking effect"),
        ColumnDef::new("summary", ColumnType::Text, "free-text summary"),
        ColumnDef::new("law_url", ColumnType::Text, "e-Gov source URL"),
        ColumnDef::new("created_at", ColumnType::DateTime, "row creation time"),
        ColumnDef::new("updated_at", ColumnType::DateTime, "row update time"),
    ],
};

/// Law <-> category association
static T_LAW_CATEGORY_MAP: TableDef = TableDef {
    name: "T_LAW_CATEGORY_MAP",
    columns: &[
        ColumnDef::new("law_id", ColumnType::Char(18), "T_LAW.id")
            .primary_key()
            .references("T_LAW", "id"),
        ColumnDef::new("category_id", ColumnType::Char(18), "M_CATEGORY.id")
            .primary_key()
            .references("M_CATEGORY", "id"),
    ],
};

/// Party <-> law association with role metadata
static T_PARTY_LAW_ROLE: TableDef = TableDef {
    name: "T_PARTY_LAW_ROLE",
    columns: &[
        ColumnDef::new("law_id", ColumnType::Char(18), "T_LAW.id")
            .primary_key()
            .references("T_LAW", "id"),
        ColumnDef::new("party_id", ColumnType::Char(18), "M_PARTY.id")
            .primary_key()
            .references("M_PARTY", "id"),
        ColumnDef::new(
            "submission_role",
            ColumnType::Enum(&SUBMISSION_ROLE),
            "involvement in submitting the bill",
        ),
        ColumnDef::new(
            "promotion_role",
            ColumnType::Enum(&PROMOTION_ROLE),
            "involvement in promoting the bill",
        ),
        ColumnDef::new(
            "vote_role",
            ColumnType::Enum(&VOTE_ROLE),
            "how the party voted",
        ),
        ColumnDef::new(
            "note",
            ColumnType::Text,
            "supplementary note (factions, defections)",
        ),
    ],
};

// Dependency order: parents first, alphabetical within a rank. Drop order
// is the exact reverse so foreign keys never block a teardown.
static TABLES: [&TableDef; 5] = [
    &M_CATEGORY,
    &M_PARTY,
    &T_LAW,
    &T_LAW_CATEGORY_MAP,
    &T_PARTY_LAW_ROLE,
];

/// All table descriptors in deterministic creation order
pub fn tables() -> &'static [&'static TableDef] {
    &TABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_in_dependency_order() {
        let names: Vec<&str> = tables().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            [
                "M_CATEGORY",
                "M_PARTY",
                "T_LAW",
                "T_LAW_CATEGORY_MAP",
                "T_PARTY_LAW_ROLE",
            ]
        );
    }

    #[test]
    fn test_association_tables_follow_their_parents() {
        let position = |name: &str| {
            tables()
                .iter()
                .position(|t| t.name == name)
                .expect("table exists")
        };
        for table in tables() {
            for col in table.columns {
                if let Some(fk) = col.references {
                    assert!(
                        position(fk.table) < position(table.name),
                        "{} created before its parent {}",
                        table.name,
                        fk.table
                    );
                }
            }
        }
    }

    #[test]
    fn test_law_create_sql() {
        let sql = T_LAW.create_sql();
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS T_LAW (\n"));
        assert!(sql.contains("id CHAR(18) NOT NULL COMMENT 'internal id (snowflake)'"));
        assert!(sql.contains("title VARCHAR(200) NOT NULL"));
        assert!(sql.contains("promulgation_date DATE"));
        assert!(sql.contains("PRIMARY KEY (id)"));
        // Enum code sets render from the shared vocabularies
        assert!(sql.contains("ENUM('national','local')"));
        assert!(sql.contains(
            "ENUM('constitution','statute','cabinet_order','imperial_order',\
'ministerial_order','national_rule','ordinance','local_rule')"
        ));
    }

    #[test]
    fn test_unique_constraints() {
        assert!(M_CATEGORY.create_sql().contains("UNIQUE (category_cd)"));
        assert!(M_PARTY.create_sql().contains("UNIQUE (name)"));
        assert!(!T_LAW.create_sql().contains("UNIQUE"));
    }

    #[test]
    fn test_association_composite_keys() {
        let map = T_LAW_CATEGORY_MAP.create_sql();
        assert!(map.contains("PRIMARY KEY (law_id, category_id)"));
        assert!(map.contains("FOREIGN KEY (law_id) REFERENCES T_LAW (id)"));
        assert!(map.contains("FOREIGN KEY (category_id) REFERENCES M_CATEGORY (id)"));

        let role = T_PARTY_LAW_ROLE.create_sql();
        assert!(role.contains("PRIMARY KEY (law_id, party_id)"));
        assert!(role.contains("FOREIGN KEY (party_id) REFERENCES M_PARTY (id)"));
        assert!(role.contains("ENUM('voted_for','voted_against','abstained','boycott','none')"));
    }

    #[test]
    fn test_every_table_has_a_primary_key() {
        for table in tables() {
            assert!(
                table.columns.iter().any(|col| col.primary_key),
                "{} has no primary key",
                table.name
            );
        }
    }

    #[test]
    fn test_drop_sql() {
        assert_eq!(T_LAW.drop_sql(), "DROP TABLE IF EXISTS T_LAW");
    }

    #[test]
    fn test_comments_do_not_break_sql_quoting() {
        for table in tables() {
            for col in table.columns {
                assert!(
                    !col.comment.contains('\''),
                    "{}.{} comment would break DDL quoting",
                    table.name,
                    col.name
                );
            }
        }
    }
}
