use crate::{prelude::*, store::CsvTable};

use std::path::Path;

use minijinja::Environment;

pub const LOGIN_TEMPLATE: &str = "login.html";
pub const DASHBOARD_TEMPLATE: &str = "dashboard.html";
pub const RECIPE_TEMPLATE: &str = "recipe_detail.html";

const TEMPLATES: [&str; 3] = [LOGIN_TEMPLATE, DASHBOARD_TEMPLATE, RECIPE_TEMPLATE];
const NOT_FOUND_PAGE: &str = "not_found.html";
const USERS: &str = "users.csv";
const REWARD_ARCHIVE: &str = "ingredients_list.zip";

/// Everything the server reads from disk, loaded once at startup.
pub struct Assets {
    pub templates: Environment<'static>,
    /// Served verbatim, not a template.
    pub not_found: String,
    pub users: CsvTable,
    pub reward: Vec<u8>,
    pub recipes: RecipeBook,
}

impl Assets {
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading assets from {:?}", path);

        let templates_path = path.join("templates");
        let mut templates = Environment::new();
        for name in TEMPLATES {
            let source = read_string(&templates_path.join(name))?;
            templates
                .add_template_owned(name, source)
                .with_context(|| format!("when parsing template {}", name))?;
        }
        let not_found = read_string(&templates_path.join(NOT_FOUND_PAGE))?;

        let users_path = path.join(USERS);
        let table_name = users_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("users");
        let users = CsvTable::parse(table_name, &read_string(&users_path)?)
            .with_context(|| format!("when parsing {:?}", users_path))?;

        let reward = read_bytes(&path.join(REWARD_ARCHIVE))?;

        let images_path = path.join("images");
        let recipes = RecipeBook::load(|file| read_bytes(&images_path.join(file)))?;

        debug!(
            "Loaded {} credential rows, {} recipes, reward archive of {} bytes",
            users.rows.len(),
            recipes.iter().count(),
            reward.len()
        );

        Ok(Self {
            templates,
            not_found,
            users,
            reward,
            recipes,
        })
    }
}

fn read_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("when reading {:?}", path))
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("when reading {:?}", path))
}
