use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Beer represents one beer record as exposed by the remote API.
///
/// `id`, `created_date` and `last_updated_date` are assigned by the server
/// and are skipped during serialization when unset, so a create/update
/// payload never carries them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub beer_name: String,
    pub beer_style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    // Only populated when the request asked for inventory detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_on_hand: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<DateTime<FixedOffset>>,
}

/// ValidationError represents a locally detected invariant violation,
/// raised before any request is sent.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("id is assigned by the server and must not be set on create")]
    ServerAssignedId,
}

impl Beer {
    /// Checks the invariants common to create and update payloads.
    pub fn validate_for_write(&self) -> Result<(), ValidationError> {
        if self.beer_name.trim().is_empty() {
            return Err(ValidationError::Blank("beerName"));
        }
        if self.beer_style.trim().is_empty() {
            return Err(ValidationError::Blank("beerStyle"));
        }
        Ok(())
    }

    /// Checks create-specific invariants: a new beer must not carry an id.
    pub fn validate_for_create(&self) -> Result<(), ValidationError> {
        if self.id.is_some() {
            return Err(ValidationError::ServerAssignedId);
        }
        self.validate_for_write()
    }
}

/// BeerPagedList represents one page of the beer collection plus the
/// server's pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerPagedList {
    pub content: Vec<Beer>,
    /// Current page number
    pub number: u32,
    /// Page size
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl BeerPagedList {
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Beer> {
        self.content.iter()
    }

    pub fn first(&self) -> Option<&Beer> {
        self.content.first()
    }
}

/// BeerListParams represents the optional filters accepted by the list
/// endpoint. `None` fields are omitted from the query string entirely,
/// never sent as empty values.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_inventory_on_hand: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_beer() -> Beer {
        Beer {
            beer_name: "Dogfishhead 90 Min IPA".to_string(),
            beer_style: "IPA".to_string(),
            upc: Some("234848549559".to_string()),
            price: Some(10.99),
            ..Beer::default()
        }
    }

    #[test]
    fn test_create_payload_omits_server_assigned_fields() {
        let json = serde_json::to_value(new_beer()).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("createdDate"));
        assert!(!obj.contains_key("lastUpdatedDate"));
        assert!(!obj.contains_key("quantityOnHand"));
        assert_eq!(obj["beerName"], "Dogfishhead 90 Min IPA");
        assert_eq!(obj["beerStyle"], "IPA");
    }

    #[test]
    fn test_deserialize_without_inventory() {
        let json = r#"{
            "id": "0a818933-087d-47f2-ad83-2f986ed087eb",
            "beerName": "Mango Bobs",
            "beerStyle": "ALE",
            "upc": "0631234200036",
            "price": 12.95,
            "createdDate": "2021-03-27T14:11:54+00:00",
            "lastUpdatedDate": "2021-03-27T14:11:54+00:00"
        }"#;

        let beer: Beer = serde_json::from_str(json).unwrap();
        assert_eq!(beer.beer_name, "Mango Bobs");
        assert!(beer.quantity_on_hand.is_none());
        assert!(beer.id.is_some());
        assert!(beer.created_date.is_some());
    }

    #[test]
    fn test_deserialize_with_inventory() {
        let json = r#"{
            "beerName": "Mango Bobs",
            "beerStyle": "ALE",
            "quantityOnHand": 3381
        }"#;

        let beer: Beer = serde_json::from_str(json).unwrap();
        assert_eq!(beer.quantity_on_hand, Some(3381));
    }

    #[test]
    fn test_validate_blank_name_and_style() {
        let mut beer = new_beer();
        beer.beer_name = "   ".to_string();
        assert_eq!(
            beer.validate_for_write(),
            Err(ValidationError::Blank("beerName"))
        );

        let mut beer = new_beer();
        beer.beer_style = String::new();
        assert_eq!(
            beer.validate_for_write(),
            Err(ValidationError::Blank("beerStyle"))
        );

        assert!(new_beer().validate_for_write().is_ok());
    }

    #[test]
    fn test_validate_create_rejects_id() {
        let mut beer = new_beer();
        beer.id = Some(Uuid::new_v4());
        assert_eq!(
            beer.validate_for_create(),
            Err(ValidationError::ServerAssignedId)
        );
        assert!(new_beer().validate_for_create().is_ok());
    }

    #[test]
    fn test_paged_list_metadata() {
        let json = r#"{
            "content": [
                {"beerName": "Mango Bobs", "beerStyle": "ALE"},
                {"beerName": "Galaxy Cat", "beerStyle": "PALE_ALE"}
            ],
            "number": 0,
            "size": 25,
            "totalElements": 30,
            "totalPages": 2
        }"#;

        let page: BeerPagedList = serde_json::from_str(json).unwrap();
        assert_eq!(page.len(), 2);
        assert!(!page.is_empty());
        assert_eq!(page.first().unwrap().beer_name, "Mango Bobs");
        assert_eq!(page.total_elements, 30);
        assert_eq!(page.total_pages, 2);
    }
}
