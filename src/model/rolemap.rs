use super::champion::{AnnotatedChampion, ChampionRecord};

/// Champion statistics grouped by role, in the order the service listed the
/// roles. Never mutated after a fetch; a refresh produces a whole new map.
#[derive(Debug, Clone, Default)]
pub struct RoleMap {
    roles: Vec<(String, Vec<ChampionRecord>)>,
}

impl RoleMap {
    pub fn new(roles: Vec<(String, Vec<ChampionRecord>)>) -> Self {
        Self { roles }
    }

    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|(role, _)| role.clone()).collect()
    }

    pub fn champions(&self, role: &str) -> &[ChampionRecord] {
        self.roles
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, champs)| champs.as_slice())
            .unwrap_or(&[])
    }

    /// Flattens into role-major order: all champions of the first role first,
    /// each tagged with its role.
    pub fn flatten(&self) -> Vec<AnnotatedChampion> {
        self.roles
            .iter()
            .flat_map(|(role, champs)| {
                champs.iter().map(|record| AnnotatedChampion {
                    role: role.clone(),
                    record: record.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ChampionRecord {
        ChampionRecord {
            name: name.to_string(),
            winrate: None,
            pick_rate: None,
            counters: Vec::new(),
        }
    }

    #[test]
    fn flatten_keeps_role_major_order() {
        let map = RoleMap::new(vec![
            ("top".to_string(), vec![record("Darius"), record("Garen")]),
            ("mid".to_string(), vec![record("Ahri")]),
        ]);

        let flat = map.flatten();
        let names: Vec<_> = flat.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Darius", "Garen", "Ahri"]);
        assert_eq!(flat[0].role, "top");
        assert_eq!(flat[2].role, "mid");
    }

    #[test]
    fn unknown_role_yields_empty_slice() {
        let map = RoleMap::new(vec![("top".to_string(), vec![record("Darius")])]);
        assert!(map.champions("jungle").is_empty());
    }

    #[test]
    fn role_names_preserve_insertion_order() {
        let map = RoleMap::new(vec![
            ("support".to_string(), Vec::new()),
            ("adc".to_string(), Vec::new()),
            ("top".to_string(), Vec::new()),
        ]);
        assert_eq!(map.role_names(), vec!["support", "adc", "top"]);
    }
}
