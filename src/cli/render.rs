use crate::ast::Node;
use crate::error::Result as TemplateResult;
use crate::render::render_program;
use std::fs;
use std::path::Path;

use super::utils::write_output;

/// Run the render subcommand: serialized tree in, JavaScript out
pub fn render(input: &Path, output: Option<&Path>) -> TemplateResult<()> {
    let source = fs::read_to_string(input)?;
    let tree = Node::from_json(&source)?;
    log::debug!("Rendering {} from {}", tree.type_name(), input.display());

    let code = render_program(&tree)?;
    write_output(code.trim_end(), output)
}
