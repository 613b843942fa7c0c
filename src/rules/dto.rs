use serde::Deserialize;

use crate::validation::{required, FieldError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleNameForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub json: String,
    #[serde(default)]
    pub template: String,
    #[serde(default, rename = "sqlStr")]
    pub sql_str: String,
    #[serde(default, rename = "sqlPart")]
    pub sql_part: String,
}

#[derive(Debug, Clone)]
pub struct ValidRuleName {
    pub name: String,
    pub description: String,
    pub json: String,
    pub template: String,
    pub sql_str: String,
    pub sql_part: String,
}

impl RuleNameForm {
    pub fn validate(&self) -> Result<ValidRuleName, Vec<FieldError>> {
        let mut errors = Vec::new();
        required(&mut errors, "name", &self.name, "Name is required");
        required(
            &mut errors,
            "description",
            &self.description,
            "Description is required",
        );
        required(&mut errors, "json", &self.json, "Json is required");
        required(&mut errors, "template", &self.template, "Template is required");
        required(&mut errors, "sqlStr", &self.sql_str, "SQL string is required");
        required(&mut errors, "sqlPart", &self.sql_part, "SQL part is required");
        if errors.is_empty() {
            Ok(ValidRuleName {
                name: self.name.trim().to_string(),
                description: self.description.trim().to_string(),
                json: self.json.trim().to_string(),
                template: self.template.trim().to_string(),
                sql_str: self.sql_str.trim().to_string(),
                sql_part: self.sql_part.trim().to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_required() {
        let errors = RuleNameForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 6);
    }
}
