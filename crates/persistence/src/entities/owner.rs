//! Owner entity (database row mapping).

use sqlx::FromRow;

use domain::models::Owner;

/// Database row mapping for the owners table.
#[derive(Debug, Clone, FromRow)]
pub struct OwnerEntity {
    pub id: i32,
    pub name: String,
}

impl From<OwnerEntity> for Owner {
    fn from(entity: OwnerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_entity_into_domain_model() {
        let entity = OwnerEntity {
            id: 1,
            name: "Ana".to_string(),
        };

        let owner: Owner = entity.into();
        assert_eq!(owner.id, 1);
        assert_eq!(owner.name, "Ana");
    }
}
