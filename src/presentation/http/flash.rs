// src/presentation/http/flash.rs
//
// One-shot notifications carried across a redirect in a cookie. The message
// is set alongside the redirect, shown on the next rendered page, and the
// cookie is cleared with that render.
use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, header::SET_COOKIE, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use headers::HeaderMapExt;
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    pub fn encode(&self) -> Option<String> {
        serde_urlencoded::to_string([
            ("level", self.level.as_str()),
            ("message", self.message.as_str()),
        ])
        .ok()
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).ok()?;
        let mut level = None;
        let mut message = None;
        for (key, value) in pairs {
            match key.as_str() {
                "level" => level = FlashLevel::parse(&value),
                "message" => message = Some(value),
                _ => {}
            }
        }
        Some(Self {
            level: level?,
            message: message?,
        })
    }

    fn set_cookie_header(&self) -> Option<HeaderValue> {
        let value = self.encode()?;
        HeaderValue::from_str(&format!("{FLASH_COOKIE}={value}; Path=/; HttpOnly")).ok()
    }
}

pub fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; Max-Age=0")
}

/// Redirect carrying a flash for the next rendered page.
pub fn redirect_with_flash(location: &str, flash: &Flash) -> Response {
    let mut response = Redirect::to(location).into_response();
    if let Some(header) = flash.set_cookie_header() {
        response.headers_mut().append(SET_COOKIE, header);
    }
    response
}

/// Extracts (without clearing) the pending flash from the request cookies.
#[derive(Debug, Clone)]
pub struct IncomingFlash(pub Option<Flash>);

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flash = parts
            .headers
            .typed_get::<headers::Cookie>()
            .and_then(|cookie| cookie.get(FLASH_COOKIE).and_then(Flash::decode));
        Ok(Self(flash))
    }
}
