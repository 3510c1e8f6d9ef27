// src/router.rs
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use astra::Request;
use chrono::Utc;
use tracing::warn;

use crate::auth::google::IdentityProvider;
use crate::auth::{session, SessionState, SESSION_COOKIE};
use crate::backend::ListingsClient;
use crate::config::SiteConfig;
use crate::db::Database;
use crate::domain::collection;
use crate::domain::editor::{self, ListingForm, PhotoSet};
use crate::domain::filter::{self, Constraint, FilterField};
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::responses::{
    css_response, html_response, json_response, redirect, redirect_with_cookie, ResultResp,
};
use crate::templates::pages;

/// Everything a request handler needs. Owned here, injected into pages;
/// nothing reads ambient globals.
#[derive(Clone)]
pub struct App {
    pub db: Database,
    pub config: SiteConfig,
    pub listings: ListingsClient,
    pub identity: Arc<dyn IdentityProvider + Send + Sync>,
}

impl App {
    pub fn new(
        db: Database,
        config: SiteConfig,
        identity: Arc<dyn IdentityProvider + Send + Sync>,
    ) -> Result<Self, ServerError> {
        let listings = ListingsClient::new(&config)?;
        Ok(App {
            db,
            config,
            listings,
            identity,
        })
    }
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => redirect("/realtor"),
        ("GET", "/realtor") => home(&req, app),
        ("GET", "/realtor/search") => search(&req, app),
        ("GET", "/realtor/listing") => listing_detail(&req, app),
        ("GET", "/realtor/my-listings") => my_listings(&req, app),
        ("GET", "/realtor/new") | ("GET", "/realtor/my-listing") => editor_form(&req, app),
        ("POST", "/realtor/my-listing") => editor_submit(&mut req, app),
        ("POST", "/realtor/listing/toggle") => toggle_listing(&mut req, app),
        ("POST", "/realtor/upload") => upload(&mut req, app),
        ("GET", "/login") => login(&req, app),
        ("POST", "/auth/google") => auth_google(&mut req, app),
        ("GET", "/auth/signout") => signout(&req, app),
        ("GET", "/static/main.css") => css_response(include_str!("../static/main.css")),
        _ => Err(ServerError::NotFound),
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn now_secs() -> i64 {
    Utc::now().timestamp()
}

fn current_session(req: &Request, app: &App) -> SessionState {
    let header = req.headers().get("Cookie").and_then(|v| v.to_str().ok());
    let raw = session::cookie_value(header, SESSION_COOKIE);
    match session::resolve(&app.db, raw, now_secs()) {
        Ok(state) => state,
        Err(e) => {
            warn!("session lookup failed: {e}");
            SessionState::SignedOut
        }
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
        None => HashMap::new(),
    }
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("read body failed: {e}")))?;
    Ok(buf)
}

/// Decoded urlencoded form pairs, repeats preserved in order.
fn parse_form(req: &mut Request) -> Result<Vec<(String, String)>, ServerError> {
    let body = read_body(req)?;
    Ok(url::form_urlencoded::parse(&body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect())
}

fn form_value<'a>(pairs: &'a [(String, String)], name: &str) -> &'a str {
    pairs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

/// Fetches the full set and narrows to the visitor-visible records. A
/// backend failure degrades to an empty set so the page still renders.
fn load_visible(app: &App) -> Vec<Listing> {
    match app.listings.fetch_all() {
        Ok(records) => collection::visible(records),
        Err(e) => {
            warn!("listing fetch failed, showing empty set: {e}");
            Vec::new()
        }
    }
}

fn home(req: &Request, app: &App) -> ResultResp {
    let session = current_session(req, app);
    let cards = collection::sorted_by_recency(load_visible(app));
    html_response(pages::home::home_page(&session, &cards, now_millis()))
}

fn search(req: &Request, app: &App) -> ResultResp {
    let session = current_session(req, app);
    let query = parse_query(req);
    let get = |key: &str| query.get(key).map(String::as_str).unwrap_or("");

    let constraints = [
        (FilterField::City, "City"),
        (FilterField::State, "State"),
        (FilterField::ZipCode, "ZipCode"),
        (FilterField::Bedrooms, "Bedrooms"),
        (FilterField::Bathrooms, "Bathrooms"),
        (FilterField::Mls, "MLS"),
        (FilterField::SquareFeet, "SquareFeet"),
    ]
    .into_iter()
    .map(|(field, key)| Constraint::new(field, get(key)))
    .collect::<Vec<_>>();

    let all = load_visible(app);
    let cards = collection::sorted_by_recency(filter::filter_all(&all, &constraints));

    let vm = pages::search::SearchVm {
        city: get("City"),
        state: get("State"),
        zip_code: get("ZipCode"),
        bedrooms: get("Bedrooms"),
        bathrooms: get("Bathrooms"),
        mls: get("MLS"),
        square_feet: get("SquareFeet"),
    };
    html_response(pages::search::search_page(&session, &vm, &cards, now_millis()))
}

fn listing_detail(req: &Request, app: &App) -> ResultResp {
    let session = current_session(req, app);
    let query = parse_query(req);
    let mls = query.get("MLS").map(String::as_str).unwrap_or("");
    if mls.is_empty() {
        return Err(ServerError::BadRequest("missing MLS".into()));
    }

    let card = app.listings.fetch_one(mls)?.ok_or(ServerError::NotFound)?;
    html_response(pages::listing::listing_page(&session, &card, now_millis()))
}

fn my_listings(req: &Request, app: &App) -> ResultResp {
    let session = current_session(req, app);
    let Some(email) = session.email().map(str::to_string) else {
        return html_response(pages::message::notice_page(
            &session,
            "My Listings",
            &[
                "Please sign in above to see your listed properties.",
                "Thank you.",
            ],
        ));
    };

    let records = match app.listings.fetch_all() {
        Ok(records) => records,
        Err(e) => {
            warn!("listing fetch failed, showing empty set: {e}");
            Vec::new()
        }
    };
    let cards = collection::owned_by(records, &email);
    html_response(pages::my_listings::my_listings_page(
        &session,
        &cards,
        now_millis(),
    ))
}

/// Loads the record named by the MLS form/query value and checks the
/// signed-in user owns it.
fn load_owned(app: &App, mls: &str, email: &str) -> Result<Listing, ServerError> {
    let card = app.listings.fetch_one(mls)?.ok_or(ServerError::NotFound)?;
    if card.user != email {
        return Err(ServerError::Unauthorized("not your listing".into()));
    }
    Ok(card)
}

fn editor_form(req: &Request, app: &App) -> ResultResp {
    let session = current_session(req, app);
    let Some(email) = session.email().map(str::to_string) else {
        return html_response(pages::message::notice_page(
            &session,
            "List Your Property",
            &["Please sign in above to list your property.", "Thank you."],
        ));
    };

    let query = parse_query(req);
    let mls = query.get("MLS").cloned().filter(|m| !m.is_empty());

    let form = match &mls {
        Some(m) => ListingForm::from_listing(&load_owned(app, m, &email)?),
        None => ListingForm::default(),
    };

    let vm = pages::my_listing::EditorVm {
        mls: mls.as_deref(),
        form: &form,
    };
    html_response(pages::my_listing::editor_page(&session, &vm))
}

fn editor_submit(req: &mut Request, app: &App) -> ResultResp {
    let session = current_session(req, app);
    let Some(email) = session.email().map(str::to_string) else {
        return Err(ServerError::Unauthorized(
            "sign in to list your property".into(),
        ));
    };

    let pairs = parse_form(req)?;
    let mls = {
        let m = form_value(&pairs, "MLS");
        (!m.is_empty()).then(|| m.to_string())
    };
    let existing = match &mls {
        Some(m) => Some(load_owned(app, m, &email)?),
        None => None,
    };

    let mut form = form_from_pairs(&pairs);
    let action = form_value(&pairs, "action");

    match action.split_once(':') {
        Some(("remove-photo", url)) => form.photos.remove_photo(url),
        Some(("remove-list-photo", url)) => form.photos.remove_list_photo(url),
        _ => match action {
            "attach-photo" => {
                let url = form_value(&pairs, "PhotoUrl").trim();
                if !url.is_empty() {
                    form.photos.attach_photo(url);
                }
            }
            "attach-list-photo" => {
                let url = form_value(&pairs, "PhotoUrl").trim();
                if !url.is_empty() {
                    form.photos.attach_list_photo(url);
                }
            }
            "save" => {
                let card =
                    editor::build_submission(&form, existing.as_ref(), &email, now_millis())
                        .map_err(|e| ServerError::Validation(e.field.to_string()))?;
                app.listings.submit(&card)?;
                return redirect("/realtor/my-listings");
            }
            _ => return Err(ServerError::BadRequest("unknown editor action".into())),
        },
    }

    // Photo bookkeeping round-trips back into the editor with the draft
    // intact; nothing is submitted until "save".
    let vm = pages::my_listing::EditorVm {
        mls: mls.as_deref(),
        form: &form,
    };
    html_response(pages::my_listing::editor_page(&session, &vm))
}

fn form_from_pairs(pairs: &[(String, String)]) -> ListingForm {
    let mut photos = PhotoSet {
        list_photo: form_value(pairs, "ListPhoto").to_string(),
        photos: Vec::new(),
    };
    for (k, v) in pairs {
        if k == "Photo" {
            photos.photos.push(v.clone());
        }
    }

    ListingForm {
        street1: form_value(pairs, "Address").to_string(),
        street2: form_value(pairs, "Address2").to_string(),
        city: form_value(pairs, "City").to_string(),
        state: form_value(pairs, "State").to_string(),
        zip_code: form_value(pairs, "ZipCode").to_string(),
        neighborhood: form_value(pairs, "Neighborhood").to_string(),
        sales_price: form_value(pairs, "Price").to_string(),
        bedrooms: form_value(pairs, "Bedrooms").to_string(),
        bathrooms: form_value(pairs, "Bathrooms").to_string(),
        square_feet: form_value(pairs, "SquareFeet").to_string(),
        lot_size: form_value(pairs, "LotSize").to_string(),
        garage_size: form_value(pairs, "GarageSize").to_string(),
        description: form_value(pairs, "Description").to_string(),
        photos,
    }
}

fn toggle_listing(req: &mut Request, app: &App) -> ResultResp {
    let session = current_session(req, app);
    let Some(email) = session.email().map(str::to_string) else {
        return Err(ServerError::Unauthorized("sign in to manage listings".into()));
    };

    let pairs = parse_form(req)?;
    let mls = form_value(&pairs, "MLS");
    if mls.is_empty() {
        return Err(ServerError::BadRequest("missing MLS".into()));
    }

    let mut card = load_owned(app, mls, &email)?;
    card.deleted = if card.is_live() {
        "true".to_string()
    } else {
        "false".to_string()
    };
    app.listings.submit(&card)?;

    redirect("/realtor/my-listings")
}

fn upload(req: &mut Request, app: &App) -> ResultResp {
    let session = current_session(req, app);
    let Some(email) = session.email().map(str::to_string) else {
        return Err(ServerError::Unauthorized("sign in to upload images".into()));
    };

    let query = parse_query(req);
    let filename = query
        .get("filename")
        .map(String::as_str)
        .unwrap_or("")
        .trim()
        .to_string();
    if filename.is_empty() || filename.contains('/') {
        return Err(ServerError::BadRequest("invalid filename".into()));
    }

    let content_type = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .parse::<mime::Mime>()
        .map_err(|_| ServerError::BadRequest("invalid content type".into()))?;
    if content_type.type_() != mime::IMAGE {
        return Err(ServerError::BadRequest(
            "only image uploads are accepted".into(),
        ));
    }

    let bytes = read_body(req)?;
    if bytes.is_empty() {
        return Err(ServerError::BadRequest("empty upload".into()));
    }

    let url = app
        .listings
        .upload_image(&email, &filename, &content_type, bytes)?;
    json_response(&serde_json::json!({ "url": url }))
}

fn login(req: &Request, app: &App) -> ResultResp {
    let session = current_session(req, app);
    if session.is_signed_in() {
        return redirect("/realtor");
    }
    html_response(pages::login::login_page(
        &session,
        &app.config.google_client_id,
    ))
}

fn auth_google(req: &mut Request, app: &App) -> ResultResp {
    let pairs = parse_form(req)?;
    let credential = form_value(&pairs, "credential");
    let email = app.identity.exchange(credential)?;

    let raw = session::sign_in(&app.db, &email, now_secs(), app.config.session_ttl_secs)?;
    let cookie = format!("{SESSION_COOKIE}={raw}; Path=/; HttpOnly; SameSite=Lax");
    redirect_with_cookie("/realtor", &cookie)
}

fn signout(req: &Request, app: &App) -> ResultResp {
    let header = req.headers().get("Cookie").and_then(|v| v.to_str().ok());
    if let Some(raw) = session::cookie_value(header, SESSION_COOKIE) {
        session::sign_out(&app.db, raw, now_secs())?;
    }
    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0");
    redirect_with_cookie("/realtor", &cookie)
}
