use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::categories::models::Category;

/// Request DTO for adding a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryDto {
    #[validate(
        custom(function = "crate::shared::validation::not_blank", message = "Name is required"),
        length(max = 64, message = "Name must not exceed 64 characters")
    )]
    pub name: String,

    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, max = 64, message = "Icon is required"))]
    pub icon: String,

    #[validate(regex(
        path = "*crate::shared::validation::HEX_COLOR_REGEX",
        message = "Color must be a hex value such as #f59e0b"
    ))]
    pub color: String,
}

impl CreateCategoryDto {
    pub(crate) fn into_category(self, id: u32) -> Category {
        Category {
            id,
            name: self.name.trim().to_string(),
            description: self.description,
            icon: self.icon,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::FieldErrors;

    fn dto(name: &str, color: &str) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.into(),
            description: String::new(),
            icon: "Droplet".into(),
            color: color.into(),
        }
    }

    #[test]
    fn test_valid_dto() {
        assert!(dto("Inondations", "#0ea5e9").validate().is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let errors: FieldErrors = dto("   ", "#0ea5e9").validate().unwrap_err().into();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_invalid_color_and_name() {
        let errors: FieldErrors = dto("", "blue").validate().unwrap_err().into();
        assert!(errors.contains("name"));
        assert_eq!(
            errors.get("color"),
            Some("Color must be a hex value such as #f59e0b")
        );
    }
}
