//! Post and product entry form state.
//!
//! Fields are addressed by the input's `name` attribute so a single input
//! handler can update any of them. Nothing is sent anywhere; a submit only
//! logs the collected values.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const STATUS_OPTIONS: &[&str] = &["Active", "Inactive"];
pub const POST_TAG_OPTIONS: &[&str] = &["React", "Design"];
pub const POST_CATEGORY_OPTIONS: &[&str] = &["Frontend", "Backend"];
pub const PRODUCT_CATEGORY_OPTIONS: &[&str] = &["Electronics", "Apparel", "Books"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostForm {
    pub user_id: String,
    pub full_name: String,
    pub title: String,
    pub slug: String,
    pub status: String,
    pub tag: String,
    pub category: String,
    /// Name of the chosen image file, if any.
    pub image: Option<String>,
    pub content: String,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            full_name: String::new(),
            title: String::new(),
            slug: String::new(),
            status: STATUS_OPTIONS[0].to_owned(),
            tag: String::new(),
            category: String::new(),
            image: None,
            content: String::new(),
        }
    }
}

impl PostForm {
    /// Update the field named `name`. Returns `false` for unknown names.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "userId" => &mut self.user_id,
            "fullName" => &mut self.full_name,
            "title" => &mut self.title,
            "slug" => &mut self.slug,
            "status" => &mut self.status,
            "tag" => &mut self.tag,
            "category" => &mut self.category,
            "content" => &mut self.content,
            "image" => {
                self.image = file_name(&value);
                return true;
            }
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductForm {
    pub product_id: String,
    pub name: String,
    /// Kept as typed; the number input does not constrain it further.
    pub price: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub image: Option<String>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            name: String::new(),
            price: String::new(),
            description: String::new(),
            category: String::new(),
            status: STATUS_OPTIONS[0].to_owned(),
            image: None,
        }
    }
}

impl ProductForm {
    /// Update the field named `name`. Returns `false` for unknown names.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "productId" => &mut self.product_id,
            "name" => &mut self.name,
            "price" => &mut self.price,
            "description" => &mut self.description,
            "category" => &mut self.category,
            "status" => &mut self.status,
            "image" => {
                self.image = file_name(&value);
                return true;
            }
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// File inputs report `C:\fakepath\name.png`; keep only the file name.
fn file_name(value: &str) -> Option<String> {
    let name = value.rsplit(['\\', '/']).next().unwrap_or(value).trim();
    (!name.is_empty()).then(|| name.to_owned())
}
