use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Parent category with its children, in the order the API lists them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub parent: String,
    pub children: Vec<String>,
}

/// The category listing, a JSON object keyed by parent category.
///
/// Display order matters to consumers, so entries are kept in the order they
/// appear in the response instead of going through a hash or sorted map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTree {
    groups: Vec<CategoryGroup>,
}

impl CategoryTree {
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.parent.as_str())
    }

    pub fn children(&self, parent: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.parent == parent)
            .map(|g| g.children.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<CategoryGroup> for CategoryTree {
    fn from_iter<I: IntoIterator<Item = CategoryGroup>>(iter: I) -> Self {
        CategoryTree {
            groups: iter.into_iter().collect(),
        }
    }
}

struct CategoryTreeVisitor;

impl<'de> Visitor<'de> for CategoryTreeVisitor {
    type Value = CategoryTree;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of parent category to child categories")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((parent, children)) = access.next_entry::<String, Vec<String>>()? {
            groups.push(CategoryGroup { parent, children });
        }
        Ok(CategoryTree { groups })
    }
}

impl<'de> Deserialize<'de> for CategoryTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CategoryTreeVisitor)
    }
}

impl Serialize for CategoryTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.parent, &group.children)?;
        }
        map.end()
    }
}

/// Corrected category for one transaction
// https://docs.saltedge.com/account_information/v5/#categories-learn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryLearn {
    pub id: String,
    pub category_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immediate: Option<bool>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryLearnRequest<'a> {
    pub(crate) customer_id: &'a str,
    pub(crate) transactions: &'a [CategoryLearn],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryLearnResponse {
    pub learned: bool,
}
