use serde::{Deserialize, Serialize};

pub mod render;

// Fallback greeted when no name is given on the command line
pub const DEFAULT_NAME: &str = "World";

// Greeting request built from command-line options
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GreetingRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub formal: bool,
}

// Resolved greeting ready for rendering
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Greeting {
    pub name: String,
    pub formal: bool,
    pub message: String,
}

impl GreetingRequest {
    // Constructor for creating a new request
    #[must_use]
    pub fn new(name: Option<String>, formal: bool) -> Self {
        Self { name, formal }
    }

    // Substitute the default name and produce the final message.
    // The name is used verbatim, no trimming or case changes.
    #[must_use]
    pub fn resolve(self) -> Greeting {
        let name = self.name.unwrap_or_else(|| DEFAULT_NAME.to_string());

        let message = if self.formal {
            format!("Greetings, esteemed {name}.")
        } else {
            format!("Hello, {name}!")
        };

        Greeting {
            name,
            formal: self.formal,
            message,
        }
    }
}

// One attribute/value pair in the project information table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub attribute: String,
    pub value: String,
}

impl InfoRow {
    // Constructor for creating a new row
    #[must_use]
    pub fn new(attribute: &str, value: &str) -> Self {
        Self {
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }
}

// Fixed project metadata shown by the info command, in display order
#[must_use]
pub fn project_info() -> Vec<InfoRow> {
    vec![
        InfoRow::new("Name", "meta-interview"),
        InfoRow::new("Package", "meta_interview"),
        InfoRow::new("Description", "A Python project template"),
        InfoRow::new("Author", "leoliu"),
    ]
}
