use anyhow::Result;
use liquid::{Parser, ParserBuilder};

use crate::project::ProjectName;

pub const MAIN_CPP: &str = include_str!("../templates/main.cpp.liquid");
pub const CMAKE_LISTS: &str = include_str!("../templates/CMakeLists.txt.liquid");
pub const README: &str = include_str!("../templates/README.md.liquid");

/// Written as is, the same for every project.
pub const GITIGNORE: &str = include_str!("../templates/gitignore");

pub fn create_liquid_engine() -> Parser {
    ParserBuilder::with_stdlib()
        .build()
        .expect("can't fail due to no partials support")
}

/// Render one of the embedded templates for `project_name`.
pub fn render(parser: &Parser, content: &str, project_name: &ProjectName) -> Result<String> {
    let template = parser.parse(content)?;
    let globals = liquid::object!({
        "project_name": project_name.to_string(),
    });
    Ok(template.render(&globals)?)
}
