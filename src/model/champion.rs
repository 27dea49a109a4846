#[derive(Debug, Clone, PartialEq)]
pub struct ChampionRecord {
    pub name: String,
    pub winrate: Option<String>,
    pub pick_rate: Option<String>,
    pub counters: Vec<String>,
}

/// A champion record tagged with the role it was listed under. Only produced
/// by flattening a role map for search.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedChampion {
    pub role: String,
    pub record: ChampionRecord,
}

impl AnnotatedChampion {
    pub fn name(&self) -> &str {
        &self.record.name
    }
}
