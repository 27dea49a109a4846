use std::{
    fmt,
    fs::{create_dir, File},
    io::{self, Read, Write},
};

use json::JsonValue;
use reqwest::{blocking::Client, StatusCode};

pub struct ApiClient {
    base_url: String,
    write_json: bool,
    load_local_json: bool,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, load_local_json: bool, write_json: bool) -> Result<Self, ClientInitError> {
        let client = Client::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            write_json,
            load_local_json,
            client,
        })
    }

    pub fn request(&self, request_type: ClientRequestType) -> Result<JsonValue, RequestError> {
        if self.load_local_json {
            let mut file = File::open(format!("data/{:?}.json", request_type))?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)?;
            let json = json::parse(buf.as_str())?;
            return Ok(json);
        }

        let url = match request_type {
            ClientRequestType::ChampionData => format!("{}/champion-data", self.base_url),
            ClientRequestType::Update => format!("{}/update", self.base_url),
        };

        let response = self.client.get(url).send()?;
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RequestError::RateLimited(Self::rate_limit_message(response)));
        }
        if !status.is_success() {
            return Err(RequestError::InvalidResponse(request_type, status));
        }

        let text = response.text()?;
        let json = json::parse(text.as_str())?;

        if self.write_json {
            let _ = create_dir("data");
            if let Ok(mut file) = File::create(format!("data/{:?}.json", request_type)) {
                let _ = file.write_all(json.pretty(2).as_bytes());
            }
        }

        Ok(json)
    }

    // The service explains the rate limit in its 429 body; pass that text on
    // untouched when it is there.
    fn rate_limit_message(response: reqwest::blocking::Response) -> String {
        response
            .text()
            .ok()
            .and_then(|body| json::parse(&body).ok())
            .and_then(|body| body["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| "Too many requests, try again later.".to_string())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ClientRequestType {
    ChampionData,
    Update,
}

#[derive(Debug)]
pub enum ClientInitError {
    ClientError(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::ClientError(err) => write!(f, "Client error: {}", err),
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::ClientError(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    ClientFailed(reqwest::Error),
    InvalidResponse(ClientRequestType, StatusCode),
    RateLimited(String),
    ParsingFailed(json::Error),
    LocalFileError(io::Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::ClientFailed(err) => write!(f, "Client error: {}", err),
            RequestError::InvalidResponse(req_type, status) => write!(
                f,
                "The server returned HTTP {} for request {:?}",
                status, req_type
            ),
            RequestError::RateLimited(message) => write!(f, "{}", message),
            RequestError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
            RequestError::LocalFileError(err) => write!(f, "Local file error: {}", err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        RequestError::ClientFailed(error)
    }
}

impl From<json::Error> for RequestError {
    fn from(error: json::Error) -> Self {
        RequestError::ParsingFailed(error)
    }
}

impl From<io::Error> for RequestError {
    fn from(error: io::Error) -> Self {
        RequestError::LocalFileError(error)
    }
}
