use std::fmt;

use once_cell::sync::OnceCell;

use crate::model::rolemap::RoleMap;

use super::gameapi::{
    client::{ApiClient, ClientInitError, ClientRequestType, RequestError},
    parsing::{
        champion::{parse_role_map, parse_update},
        ParsingError,
    },
};

/// Owns the stats service client and the last successfully fetched role map.
/// The interaction layer only ever sees typed results from here.
pub struct DataManager {
    client: ApiClient,
    role_map_cache: OnceCell<RoleMap>,
}

impl DataManager {
    pub fn new(base_url: &str, load_local_json: bool, write_json: bool) -> Result<Self, DataManagerInitError> {
        let client = ApiClient::new(base_url, load_local_json, write_json)?;
        Ok(Self {
            client,
            role_map_cache: OnceCell::new(),
        })
    }

    pub fn get_role_map(&self) -> DataRetrievalResult<&RoleMap> {
        self.role_map_cache.get_or_try_init(|| {
            let data_json = self.client.request(ClientRequestType::ChampionData)?;
            let role_map = parse_role_map(&data_json)?;
            Ok(role_map)
        })
    }

    /// Asks the service to rebuild its statistics and replaces the cached
    /// role map with the response. A rate-limited refusal leaves the cache
    /// untouched and surfaces as an error.
    pub fn update(&mut self) -> DataRetrievalResult<()> {
        let update_json = self.client.request(ClientRequestType::Update)?;
        let role_map = parse_update(&update_json)?;
        self.role_map_cache = OnceCell::from(role_map);
        Ok(())
    }
}

pub type DataRetrievalResult<T> = Result<T, DataRetrievalError>;

#[derive(Debug)]
pub enum DataManagerInitError {
    ClientFailed(ClientInitError),
}

impl fmt::Display for DataManagerInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataManagerInitError::ClientFailed(err) => write!(f, "Client init failed: {}", err),
        }
    }
}

impl From<ClientInitError> for DataManagerInitError {
    fn from(error: ClientInitError) -> Self {
        Self::ClientFailed(error)
    }
}

#[derive(Debug)]
pub enum DataRetrievalError {
    ClientFailed(RequestError),
    ParsingFailed(ParsingError),
}

impl DataRetrievalError {
    /// The service's own words when it refused a refresh for rate limiting;
    /// shown to the user without any rewording.
    pub fn rate_limit_message(&self) -> Option<&str> {
        match self {
            DataRetrievalError::ClientFailed(RequestError::RateLimited(message)) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for DataRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRetrievalError::ClientFailed(err) => write!(f, "{}", err),
            DataRetrievalError::ParsingFailed(err) => write!(f, "{}", err),
        }
    }
}

impl From<RequestError> for DataRetrievalError {
    fn from(error: RequestError) -> Self {
        Self::ClientFailed(error)
    }
}

impl From<ParsingError> for DataRetrievalError {
    fn from(error: ParsingError) -> Self {
        Self::ParsingFailed(error)
    }
}
