use std::path::PathBuf;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::{
  generator::walker::SpecWalker,
  ui::{Colors, colors::to_comfy_color, term_width},
  utils::spec::SpecLoader,
};

/// Prints every operation in the description with its method, path, and the
/// return types a generated client would use. Rows the generator would
/// reject are still listed, with a placeholder in the returns column.
pub async fn list_operations(input: &PathBuf, colors: &Colors) -> anyhow::Result<()> {
  let spec = SpecLoader::open(input).await?.parse()?;
  let walker = SpecWalker::new(&spec);

  let mut rows = Vec::new();
  for (path, method, operation) in walker.operations() {
    let id = operation
      .operation_id
      .clone()
      .unwrap_or_else(|| String::from("-"));
    let returns = match walker.response_table(&path, &method, operation) {
      Ok(table) => {
        let names = SpecWalker::return_types(&table);
        if names.is_empty() {
          String::from("()")
        } else {
          names.join(", ")
        }
      }
      Err(_) => String::from("(invalid)"),
    };
    rows.push((id, method.to_string(), path, returns));
  }
  rows.sort();

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());
  table.set_header(vec![
    Cell::new("OPERATION ID").fg(to_comfy_color(colors.label())),
    Cell::new("METHOD").fg(to_comfy_color(colors.label())),
    Cell::new("PATH").fg(to_comfy_color(colors.label())),
    Cell::new("RETURNS").fg(to_comfy_color(colors.label())),
  ]);
  for (id, method, path, returns) in rows {
    table.add_row(vec![
      Cell::new(id)
        .fg(to_comfy_color(colors.value()))
        .add_attribute(Attribute::Bold),
      Cell::new(method)
        .fg(to_comfy_color(colors.accent()))
        .set_alignment(CellAlignment::Right),
      Cell::new(path).fg(to_comfy_color(colors.primary())),
      Cell::new(returns).fg(to_comfy_color(colors.info())),
    ]);
  }

  println!("{table}");
  Ok(())
}
