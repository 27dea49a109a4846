use json::{object::Object, JsonValue};

use crate::model::{champion::ChampionRecord, rolemap::RoleMap};

use super::ParsingError;

/// Decodes the `/champion-data` payload: an object mapping each role to an
/// ordered list of champion entries. Role order is kept as sent.
pub fn parse_role_map(json: &JsonValue) -> Result<RoleMap, ParsingError> {
    if let JsonValue::Object(root) = json {
        let mut roles = Vec::new();
        for (role, champs_entry) in root.iter() {
            if let JsonValue::Array(champ_array) = champs_entry {
                let mut champions = Vec::with_capacity(champ_array.len());
                for champ_entry in champ_array {
                    match champ_entry {
                        JsonValue::Object(champ_obj) => {
                            champions.push(parse_champion_obj(champ_obj)?)
                        }
                        _ => return Err(ParsingError::InvalidType("champion entry".into())),
                    }
                }
                roles.push((role.to_string(), champions));
            } else {
                return Err(ParsingError::InvalidType(format!("role '{}'", role)));
            }
        }

        return Ok(RoleMap::new(roles));
    }

    Err(ParsingError::InvalidType("root".into()))
}

/// Decodes the `/update` payload, which wraps the role map in a `data` field.
pub fn parse_update(json: &JsonValue) -> Result<RoleMap, ParsingError> {
    if let JsonValue::Object(root) = json {
        return parse_role_map(&root["data"]);
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_champion_obj(obj: &Object) -> Result<ChampionRecord, ParsingError> {
    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    if name.is_empty() {
        return Err(ParsingError::EmptyChampionName);
    }

    // winrate and pickRate are percentage strings, absent for some champions
    let winrate = obj["winrate"].as_str().map(str::to_string);
    let pick_rate = obj["pickRate"].as_str().map(str::to_string);

    let counters = match &obj["counters"] {
        JsonValue::Array(counter_array) => counter_array
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .ok_or(ParsingError::InvalidType("counter entry".into()))
            })
            .collect::<Result<Vec<_>, _>>()?,
        JsonValue::Null => Vec::new(),
        _ => return Err(ParsingError::InvalidType("counters".into())),
    };

    Ok(ChampionRecord {
        name: name.to_string(),
        winrate,
        pick_rate,
        counters,
    })
}
