//! Generator spec (`*.gen.yaml`) parsing and compilation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RegenError, Result};
use crate::registry::{GenerationPlan, GeneratorRegistry};

use super::expand::Template;

/// A declarative generator loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSpec {
    /// Named value lists that regions expand over.
    pub lists: BTreeMap<String, Vec<String>>,

    /// Files to regenerate, in order.
    pub targets: Vec<TargetSpec>,
}

/// One target file in a generator spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSpec {
    /// Path to the target, relative to the spec file's directory.
    pub path: PathBuf,

    #[serde(default)]
    pub regions: BTreeMap<String, RegionSpec>,
}

/// How to produce the text of one region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegionSpec {
    /// Fixed replacement text.
    pub text: Option<String>,

    /// Template rendered per row and item.
    pub template: Option<String>,

    /// List producing one output line per value.
    pub rows: Option<String>,

    /// List whose rendered values are joined on each line.
    pub items: Option<String>,

    /// Separator between items on a line.
    pub join: Option<String>,
}

/// A validated region, ready to expand.
#[derive(Debug, Clone)]
pub enum RegionBody {
    Text(String),
    Template {
        template: Template,
        rows: Option<(String, Vec<String>)>,
        items: Option<(String, Vec<String>)>,
        join: String,
    },
}

impl RegionBody {
    /// Expand into the region's replacement text.
    ///
    /// An empty `rows` list expands to nothing, which leaves the region as is.
    pub fn expand(&self) -> Result<String> {
        match self {
            RegionBody::Text(text) => Ok(text.clone()),
            RegionBody::Template {
                template,
                rows,
                items,
                join,
            } => match rows {
                Some((row_var, values)) => {
                    let lines = values
                        .iter()
                        .map(|row| {
                            expand_line(template, &[(row_var.as_str(), row.as_str())], items, join)
                        })
                        .collect::<Result<Vec<_>>>()?;
                    Ok(lines.join("\n"))
                }
                None => expand_line(template, &[], items, join),
            },
        }
    }
}

fn expand_line(
    template: &Template,
    bindings: &[(&str, &str)],
    items: &Option<(String, Vec<String>)>,
    join: &str,
) -> Result<String> {
    let Some((item_var, values)) = items else {
        return template.render(bindings);
    };

    let mut rendered = Vec::with_capacity(values.len());
    for item in values {
        let mut scoped = bindings.to_vec();
        scoped.push((item_var.as_str(), item.as_str()));
        rendered.push(template.render(&scoped)?);
    }

    Ok(rendered.join(join))
}

impl GeneratorSpec {
    /// Load a spec from a `.gen.yaml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RegenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read generator spec: {}", e),
        })?;

        Self::parse(&content).map_err(|e| match e {
            RegenError::Parse { message, help } => RegenError::Parse {
                message: format!("{}: {}", path.display(), message),
                help,
            },
            other => other,
        })
    }

    /// Parse a spec from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RegenError::Parse {
            message: format!("Invalid generator spec: {}", e),
            help: Some("Expected top-level `lists` and `targets` keys".to_string()),
        })
    }

    /// Validate and compile into a plan. Target paths resolve against `base_dir`.
    pub fn compile(&self, base_dir: &Path) -> Result<GenerationPlan> {
        let mut plan = GenerationPlan::new();

        for target in &self.targets {
            let mut registry = GeneratorRegistry::new();

            for (name, region) in &target.regions {
                let body = self.region_body(name, region)?;
                registry.register(name.clone(), move || body.expand());
            }

            plan.add_target(base_dir.join(&target.path), registry);
        }

        Ok(plan)
    }

    fn region_body(&self, name: &str, region: &RegionSpec) -> Result<RegionBody> {
        let template = match (&region.text, &region.template) {
            (Some(text), None) => {
                if region.rows.is_some() || region.items.is_some() {
                    return Err(RegenError::Parse {
                        message: format!("Region '{}' combines `text` with `rows`/`items`", name),
                        help: Some("Lists only apply to `template` regions".to_string()),
                    });
                }
                return Ok(RegionBody::Text(text.clone()));
            }
            (None, Some(template)) => Template::parse(template)?,
            (Some(_), Some(_)) => {
                return Err(RegenError::Parse {
                    message: format!("Region '{}' has both `text` and `template`", name),
                    help: Some("Use exactly one of them".to_string()),
                });
            }
            (None, None) => {
                return Err(RegenError::Parse {
                    message: format!("Region '{}' has neither `text` nor `template`", name),
                    help: None,
                });
            }
        };

        if let (Some(rows), Some(items)) = (&region.rows, &region.items) {
            if rows == items {
                return Err(RegenError::Parse {
                    message: format!("Region '{}' uses list '{}' for both `rows` and `items`", name, rows),
                    help: Some("Each list can bind only one variable per region".to_string()),
                });
            }
        }

        let rows = self.bind_list(name, region.rows.as_deref())?;
        let items = self.bind_list(name, region.items.as_deref())?;

        for var in template.variables() {
            let bound = rows.iter().chain(items.iter()).any(|(list, _)| list == var);
            if !bound {
                return Err(RegenError::Template {
                    message: format!("Region '{}' uses unbound variable '{}'", name, var),
                    help: Some("Variables must name the region's `rows` or `items` list".to_string()),
                });
            }
        }

        Ok(RegionBody::Template {
            template,
            rows,
            items,
            join: region.join.clone().unwrap_or_else(|| " ".to_string()),
        })
    }

    fn bind_list(&self, region: &str, list: Option<&str>) -> Result<Option<(String, Vec<String>)>> {
        let Some(list) = list else {
            return Ok(None);
        };

        let values = self.lists.get(list).ok_or_else(|| RegenError::Parse {
            message: format!("Region '{}' references unknown list '{}'", region, list),
            help: Some(format!(
                "Defined lists: {}",
                self.lists.keys().cloned().collect::<Vec<_>>().join(", ")
            )),
        })?;

        Ok(Some((list.to_string(), values.clone())))
    }
}

/// Load a spec file and compile it relative to its own directory.
pub fn load_plan(path: &Path) -> Result<GenerationPlan> {
    let spec = GeneratorSpec::load(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    spec.compile(base_dir)
}

/// Check whether a file name marks a generator spec.
pub fn is_spec_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.ends_with(".gen.yaml") || name.ends_with(".gen.yml"))
}
