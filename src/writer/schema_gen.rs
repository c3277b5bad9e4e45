/// SQLite storage class of an exported column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
    pub nullable: bool,
}

impl Column {
    pub const fn new(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: true,
        }
    }

    pub const fn required(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub indexed: &'static [&'static str],
}

impl TableSpec {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }
}

/// Exported catalog table; `extra_json` holds fields without a column
pub const COURSES_TABLE: TableSpec = TableSpec {
    name: "golf_courses",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("name", ColumnType::Text),
        Column::required("region", ColumnType::Text),
        Column::new("city", ColumnType::Text),
        Column::new("address", ColumnType::Text),
        Column::required("holes", ColumnType::Integer),
        Column::required("type", ColumnType::Text),
        Column::required("difficulty", ColumnType::Text),
        Column::new("latitude", ColumnType::Real),
        Column::new("longitude", ColumnType::Real),
        Column::new("extra_json", ColumnType::Text),
    ],
    indexed: &["region"],
};

/// Generate CREATE TABLE SQL for a table spec
pub fn generate_create_table(spec: &TableSpec) -> String {
    let columns: Vec<String> = spec
        .columns
        .iter()
        .map(|col| {
            let sql_type = match col.col_type {
                ColumnType::Integer => "INTEGER",
                ColumnType::Real => "REAL",
                ColumnType::Text => "TEXT",
            };
            let pk = if col.name == "id" { " PRIMARY KEY" } else { "" };
            let null_constraint = if !col.nullable { " NOT NULL" } else { "" };

            format!("    \"{}\" {}{}{}", col.name, sql_type, pk, null_constraint)
        })
        .collect();

    format!("CREATE TABLE {} (\n{}\n)", spec.name, columns.join(",\n"))
}

/// Generate CREATE INDEX statements for indexed columns
pub fn generate_indexes(spec: &TableSpec) -> Vec<String> {
    spec.indexed
        .iter()
        .map(|column| {
            format!(
                "CREATE INDEX idx_{}_{} ON {}(\"{}\")",
                spec.name, column, spec.name, column
            )
        })
        .collect()
}

/// Parameterised INSERT for every column of the spec
pub fn generate_insert(spec: &TableSpec) -> String {
    let names = spec.column_names();
    let quoted: Vec<String> = names.iter().map(|n| format!("\"{}\"", n)).collect();
    let placeholders: Vec<&str> = names.iter().map(|_| "?").collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        spec.name,
        quoted.join(", "),
        placeholders.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table(&COURSES_TABLE);
        assert!(sql.starts_with("CREATE TABLE golf_courses"));
        assert!(sql.contains("\"id\" INTEGER PRIMARY KEY NOT NULL"));
        assert!(sql.contains("\"type\" TEXT NOT NULL"));
        assert!(sql.contains("\"latitude\" REAL,"));
    }

    #[test]
    fn test_generate_indexes() {
        let indexes = generate_indexes(&COURSES_TABLE);
        assert_eq!(
            indexes,
            vec!["CREATE INDEX idx_golf_courses_region ON golf_courses(\"region\")"]
        );
    }

    #[test]
    fn test_generate_insert_has_one_placeholder_per_column() {
        let sql = generate_insert(&COURSES_TABLE);
        assert_eq!(sql.matches('?').count(), COURSES_TABLE.columns.len());
    }
}
