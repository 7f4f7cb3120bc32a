use serde::{Deserialize, Serialize};

/// A directory entry as the backend sends it. Every field is display text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub website: String,
    pub phone: String,
    pub job_title: String,
    pub company: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub total: u64,
    pub total_pages: u32,
    pub page: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryResult {
    pub data: Vec<UserRecord>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_result_deserialize() {
        let json = r#"{
            "data": [{
                "id": "u1",
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "website": "https://ada.dev",
                "phone": "+44 20 0000 0000",
                "jobTitle": "Analyst",
                "company": "Analytical Engines"
            }],
            "pagination": {"total": 11, "totalPages": 2, "page": 1}
        }"#;
        let result: DirectoryResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].job_title, "Analyst");
        assert_eq!(result.pagination, Pagination { total: 11, total_pages: 2, page: 1 });
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let result: DirectoryResult = serde_json::from_str("{}").unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.pagination, Pagination::default());

        let result: DirectoryResult =
            serde_json::from_str(r#"{"data":[{"id":"u2"}],"pagination":{"total":1}}"#).unwrap();
        assert_eq!(result.data[0].name, "");
        assert_eq!(result.pagination.total_pages, 0);
    }
}
