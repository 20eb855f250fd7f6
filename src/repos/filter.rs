use super::repository::Repository;
use serde_json::Value;

/// JSON keys of a listing entry that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoField {
    Id,
    Name,
    Owner,
    Type,
    Permission,
    Encrypted,
    Desc,
}

impl RepoField {
    pub fn key(&self) -> &'static str {
        match self {
            RepoField::Id => "id",
            RepoField::Name => "name",
            RepoField::Owner => "owner",
            RepoField::Type => "type",
            RepoField::Permission => "permission",
            RepoField::Encrypted => "encrypted",
            RepoField::Desc => "desc",
        }
    }

    /// An entry without the key never matches.
    pub fn matches(&self, entry: &Value, expected: &Value) -> bool {
        entry.get(self.key()) == Some(expected)
    }
}

/// Collapses entries sharing an id into the position of the first one.
///
/// A later duplicate replaces the kept entry unless it is owned by
/// `Organization`.
pub fn remove_duplicate_repos(repos: Vec<Repository>) -> Vec<Repository> {
    let mut unique: Vec<Repository> = Vec::with_capacity(repos.len());

    for repo in repos {
        match unique.iter().position(|r| r.id == repo.id) {
            None => unique.push(repo),
            Some(index) if !repo.is_organization_owned() => {
                log::debug!(
                    "replacing duplicate repo {} owned by {} with copy owned by {}",
                    repo.id,
                    unique[index].owner,
                    repo.owner
                );
                unique[index] = repo;
            }
            Some(_) => {}
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo(id: &str, owner: &str) -> Repository {
        serde_json::from_value(json!({ "id": id, "name": id, "owner": owner })).unwrap()
    }

    #[test]
    fn should_prefer_non_organization_copy() {
        let repos = vec![
            repo("a", "Organization"),
            repo("b", "jdoe"),
            repo("a", "collab-x-editor"),
        ];

        let unique = remove_duplicate_repos(repos);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].id, "a");
        assert_eq!(unique[0].owner, "collab-x-editor");
        assert_eq!(unique[1].id, "b");
    }

    #[test]
    fn should_keep_first_copy_when_duplicate_is_organization() {
        let repos = vec![repo("a", "collab-x-editor"), repo("a", "Organization")];

        let unique = remove_duplicate_repos(repos);

        assert_eq!(unique, vec![repo("a", "collab-x-editor")]);
    }

    #[test]
    fn should_let_last_non_organization_copy_win() {
        let repos = vec![repo("a", "first"), repo("a", "second")];

        let unique = remove_duplicate_repos(repos);

        assert_eq!(unique, vec![repo("a", "second")]);
    }

    #[test]
    fn should_keep_organization_copy_without_alternatives() {
        let repos = vec![repo("a", "Organization"), repo("a", "Organization")];

        let unique = remove_duplicate_repos(repos);

        assert_eq!(unique, vec![repo("a", "Organization")]);
    }

    #[test]
    fn should_match_only_present_fields() {
        let with_desc = json!({ "id": "a", "name": "n", "desc": "x" });
        let without_desc = json!({ "id": "b", "name": "n" });

        assert!(RepoField::Desc.matches(&with_desc, &json!("x")));
        assert!(!RepoField::Desc.matches(&without_desc, &json!("x")));
        assert!(!RepoField::Desc.matches(&without_desc, &Value::Null));
    }

    #[test]
    fn should_compare_typed_values() {
        let entry = json!({ "id": "a", "name": "n", "encrypted": true });

        assert!(RepoField::Encrypted.matches(&entry, &json!(true)));
        assert!(!RepoField::Encrypted.matches(&entry, &json!("true")));
    }
}
