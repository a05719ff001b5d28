use crate::error::Result as TemplateResult;
use crate::operators::{Associativity, OperatorTable};

use super::{utils::write_output, OperatorsArgs, TableFormat};

/// Run the operators subcommand
pub fn operators(args: &OperatorsArgs) -> TemplateResult<()> {
    let table = match &args.table_path {
        Some(path) => OperatorTable::from_path(path)?,
        None => OperatorTable::standard(),
    };

    let output = match args.format {
        TableFormat::Json => table.to_json()?,
        TableFormat::Text => format_table(&table),
    };
    write_output(&output, None)
}

/// One line per operator: token, precedence, associativity, result type
pub fn format_table(table: &OperatorTable) -> String {
    let mut out = format!("{:<6} {:>4}  {:<5}  {}\n", "token", "prec", "assoc", "type");
    for (token, info) in table.iter() {
        let assoc = match info.associativity {
            Associativity::Left => "left",
            Associativity::Right => "right",
        };
        out.push_str(&format!(
            "{:<6} {:>4}  {:<5}  {}\n",
            token, info.precedence, assoc, info.result_type
        ));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_lists_every_token() {
        let table = OperatorTable::standard();
        let text = format_table(&table);
        assert_eq!(text.lines().count(), table.len() + 1);
        assert!(text.lines().any(|line| line.starts_with("^ ") && line.ends_with("number")));
    }
}
