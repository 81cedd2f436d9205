// Card configuration module
// Which calendars to show and how the clock is labelled

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal configuration problems, reported when the card is set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("You need to define an entity")]
    MissingEntity,
    #[error("Calendar entity at position {0} has an empty id")]
    EmptyEntity(usize),
    #[error("Invalid card configuration: {0}")]
    InvalidConfig(String),
}

/// A calendar source reference: either a bare id or an id with a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(String),
    Named {
        entity: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl EntityRef {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Named { entity, .. } => entity,
        }
    }

    /// Name used when reporting a failed fetch.
    pub fn display_name(&self) -> &str {
        match self {
            EntityRef::Named {
                name: Some(name), ..
            } if !name.trim().is_empty() => name,
            _ => self.id(),
        }
    }
}

impl From<&str> for EntityRef {
    fn from(id: &str) -> Self {
        EntityRef::Id(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntitySelection {
    Many(Vec<EntityRef>),
    One(EntityRef),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntitySelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<EntityRef>>,
    #[serde(default)]
    pub display_24_hour_time: bool,
    #[serde(default)]
    pub hide_full_day_events: bool,
}

impl CardConfig {
    pub fn for_entity(id: impl Into<String>) -> Self {
        Self {
            entity: Some(EntitySelection::One(EntityRef::Id(id.into()))),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CardError> {
        serde_json::from_str(json).map_err(|err| CardError::InvalidConfig(err.to_string()))
    }

    /// Every configured source, `entity` entries first, then `entities`.
    pub fn calendar_entities(&self) -> Vec<EntityRef> {
        let mut entities = match &self.entity {
            Some(EntitySelection::One(entity)) => vec![entity.clone()],
            Some(EntitySelection::Many(list)) => list.clone(),
            None => Vec::new(),
        };
        if let Some(extra) = &self.entities {
            entities.extend(extra.iter().cloned());
        }
        entities
    }

    pub fn validate(&self) -> Result<(), CardError> {
        let entities = self.calendar_entities();
        if entities.is_empty() {
            return Err(CardError::MissingEntity);
        }

        if let Some(position) = entities
            .iter()
            .position(|entity| entity.id().trim().is_empty())
        {
            return Err(CardError::EmptyEntity(position));
        }

        Ok(())
    }
}
