//! A stand-in for the content API serving canned JSON.
//!
//! The data deliberately mixes the response shapes the real API produces:
//! bare arrays next to `{ <resource>: [...], meta }` envelopes, list fields
//! sent as arrays, newline text, JSON-encoded strings and objects, and both
//! camelCase and snake_case keys on bids.

use actix_cors::Cors;
use actix_web::dev::{HttpServiceFactory, Server};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::TcpListener;

pub const NEWS_COUNT: usize = 4;
pub const EVENT_COUNT: usize = 8;
pub const DISTRICT_COUNT: usize = 12;
/// District id that answers 401.
pub const RESTRICTED_DISTRICT: &str = "restricted";

/// How the fixture server answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Serve the canned data.
    Healthy,
    /// Answer every request with a 500.
    Failing,
}

/// Build the server, but not await it.
///
/// Returns the server and the port it bound to. Binding port 0 lets the OS
/// assign one.
pub fn build(
    ip: &str,
    port: u16,
    behavior: Behavior,
) -> std::io::Result<(Server, u16)> {
    let listener = TcpListener::bind(format!("{ip}:{port}"))?;
    let port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let app = App::new().wrap(Cors::permissive());
        match behavior {
            Behavior::Healthy => app.service(fixture_services()),
            Behavior::Failing => app.default_service(web::to(|| async {
                HttpResponse::InternalServerError()
                    .json(json!({"error": "fixture failure"}))
            })),
        }
    })
    .listen(listener)?
    .run();
    Ok((server, port))
}

pub fn fixture_services() -> impl HttpServiceFactory {
    web::scope("/api/v1")
        .service(list_news)
        .service(get_news)
        .service(featured_events)
        .service(upcoming_events)
        .service(list_events)
        .service(get_event)
        .service(active_bids)
        .service(closed_bids)
        .service(list_bids)
        .service(get_bid)
        .service(completed_projects)
        .service(ongoing_projects)
        .service(list_projects)
        .service(get_project)
        .service(active_vacancies)
        .service(expired_vacancies)
        .service(list_vacancies)
        .service(get_vacancy)
        .service(list_districts)
        .service(get_district)
        .service(about)
        .service(list_admin_users)
        .service(get_admin_user)
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": format!("{what} not found")}))
}

fn find_by_id(items: Vec<Value>, id: &str) -> Option<Value> {
    items.into_iter().find(|item| match &item["id"] {
        Value::String(s) => s == id,
        Value::Number(n) => n.to_string() == id,
        _ => false,
    })
}

fn field_is(item: &Value, key: &str, expected: &str) -> bool {
    item[key].as_str() == Some(expected)
}

/// Slice `items` the way the real API paginates, wrapped in an envelope.
fn paginated(key: &str, items: Vec<Value>, page: u32, per_page: u32) -> Value {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(per_page as usize);
    let page_items: Vec<Value> = items
        .into_iter()
        .skip((page as usize - 1) * per_page as usize)
        .take(per_page as usize)
        .collect();
    let mut body = json!({
        "meta": {
            "current_page": page,
            "total_pages": total_pages,
            "total_count": total_count,
        }
    });
    body[key] = Value::Array(page_items);
    body
}

#[derive(Debug, Deserialize)]
struct NewsParams {
    featured: Option<bool>,
    category: Option<String>,
}

#[get("/news")]
async fn list_news(params: web::Query<NewsParams>) -> impl Responder {
    let items: Vec<Value> = news()
        .into_iter()
        .filter(|item| {
            !params.featured.unwrap_or(false)
                || item["is_featured"] == Value::Bool(true)
        })
        .filter(|item| match &params.category {
            Some(category) => field_is(item, "category", category),
            None => true,
        })
        .collect();
    HttpResponse::Ok().json(items)
}

#[get("/news/{id}")]
async fn get_news(id: web::Path<String>) -> impl Responder {
    match find_by_id(news(), &id) {
        Some(item) => HttpResponse::Ok().json(item),
        None => not_found("news item"),
    }
}

#[derive(Debug, Deserialize)]
struct EventParams {
    page: Option<u32>,
    per_page: Option<u32>,
    event_type: Option<String>,
}

#[get("/events")]
async fn list_events(params: web::Query<EventParams>) -> impl Responder {
    let items: Vec<Value> = events()
        .into_iter()
        .filter(|item| match &params.event_type {
            Some(kind) => field_is(item, "event_type", kind),
            None => true,
        })
        .collect();
    HttpResponse::Ok().json(paginated(
        "events",
        items,
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(6),
    ))
}

#[get("/events/featured")]
async fn featured_events() -> impl Responder {
    let items: Vec<Value> = events()
        .into_iter()
        .filter(|item| item["is_featured"] == Value::Bool(true))
        .collect();
    HttpResponse::Ok().json(json!({"events": items}))
}

#[get("/events/upcoming")]
async fn upcoming_events() -> impl Responder {
    let items: Vec<Value> = events()
        .into_iter()
        .filter(|item| field_is(item, "status", "upcoming"))
        .collect();
    HttpResponse::Ok().json(json!({"events": items}))
}

#[get("/events/{slug}")]
async fn get_event(slug: web::Path<String>) -> impl Responder {
    match events()
        .into_iter()
        .find(|item| field_is(item, "slug", &slug))
    {
        Some(item) => HttpResponse::Ok().json(item),
        None => not_found("event"),
    }
}

#[derive(Debug, Deserialize)]
struct BidParams {
    category: Option<String>,
    #[serde(rename = "type")]
    bid_type: Option<String>,
}

#[get("/bids")]
async fn list_bids(params: web::Query<BidParams>) -> impl Responder {
    let items: Vec<Value> = bids()
        .into_iter()
        .filter(|item| match &params.category {
            Some(category) => field_is(item, "category", category),
            None => true,
        })
        .filter(|item| match &params.bid_type {
            Some(kind) => field_is(item, "type", kind),
            None => true,
        })
        .collect();
    HttpResponse::Ok().json(items)
}

#[get("/bids/active")]
async fn active_bids() -> impl Responder {
    let items: Vec<Value> = bids()
        .into_iter()
        .filter(|item| field_is(item, "status", "active"))
        .collect();
    HttpResponse::Ok().json(items)
}

#[get("/bids/closed")]
async fn closed_bids() -> impl Responder {
    let items: Vec<Value> = bids()
        .into_iter()
        .filter(|item| field_is(item, "status", "closed"))
        .collect();
    HttpResponse::Ok().json(items)
}

#[get("/bids/{id}")]
async fn get_bid(id: web::Path<String>) -> impl Responder {
    match find_by_id(bids(), &id) {
        Some(item) => HttpResponse::Ok().json(item),
        None => not_found("bid"),
    }
}

#[get("/projects")]
async fn list_projects() -> impl Responder {
    HttpResponse::Ok().json(json!({"projects": projects()}))
}

#[get("/projects/completed")]
async fn completed_projects() -> impl Responder {
    let items: Vec<Value> = projects()
        .into_iter()
        .filter(|item| field_is(item, "status", "completed"))
        .collect();
    HttpResponse::Ok().json(items)
}

#[get("/projects/ongoing")]
async fn ongoing_projects() -> impl Responder {
    let items: Vec<Value> = projects()
        .into_iter()
        .filter(|item| field_is(item, "status", "ongoing"))
        .collect();
    HttpResponse::Ok().json(json!({"projects": items}))
}

#[get("/projects/{id}")]
async fn get_project(id: web::Path<String>) -> impl Responder {
    match find_by_id(projects(), &id) {
        Some(item) => HttpResponse::Ok().json(item),
        None => not_found("project"),
    }
}

#[get("/vacancies")]
async fn list_vacancies() -> impl Responder {
    HttpResponse::Ok().json(vacancies())
}

#[get("/vacancies/active")]
async fn active_vacancies() -> impl Responder {
    let items: Vec<Value> = vacancies()
        .into_iter()
        .filter(|item| field_is(item, "status", "active"))
        .collect();
    HttpResponse::Ok().json(items)
}

#[get("/vacancies/expired")]
async fn expired_vacancies() -> impl Responder {
    let items: Vec<Value> = vacancies()
        .into_iter()
        .filter(|item| field_is(item, "status", "expired"))
        .collect();
    HttpResponse::Ok().json(items)
}

#[get("/vacancies/{id}")]
async fn get_vacancy(id: web::Path<String>) -> impl Responder {
    match find_by_id(vacancies(), &id) {
        Some(item) => HttpResponse::Ok().json(item),
        None => not_found("vacancy"),
    }
}

#[derive(Debug, Deserialize)]
struct PageParams {
    page: Option<u32>,
    per_page: Option<u32>,
}

#[get("/districts")]
async fn list_districts(params: web::Query<PageParams>) -> impl Responder {
    HttpResponse::Ok().json(paginated(
        "districts",
        districts(),
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(10),
    ))
}

#[get("/districts/{id}")]
async fn get_district(id: web::Path<String>) -> impl Responder {
    if id.as_str() == RESTRICTED_DISTRICT {
        return HttpResponse::Unauthorized()
            .json(json!({"error": "Unauthorized"}));
    }
    match find_by_id(districts(), &id) {
        Some(item) => HttpResponse::Ok().json(item),
        None => not_found("district"),
    }
}

#[get("/about")]
async fn about() -> impl Responder {
    HttpResponse::Ok().json(about_us())
}

#[get("/admin_users")]
async fn list_admin_users() -> impl Responder {
    HttpResponse::Ok().json(admin_users())
}

#[get("/admin_users/{id}")]
async fn get_admin_user(id: web::Path<String>) -> impl Responder {
    match find_by_id(admin_users(), &id) {
        Some(item) => HttpResponse::Ok().json(item),
        None => not_found("admin user"),
    }
}

pub fn news() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Adama-Awash Expressway construction begins",
            "content": "Ground was broken on the 90km expressway.",
            "excerpt": "Construction of the expressway is under way.",
            "published_date": "2025-03-01T08:30:00.000Z",
            "category": "Projects",
            "tags": ["expressway", "construction"],
            "is_featured": true,
            "view_count": 1520,
            "author": "Communications Directorate",
            "thumbnail_url": "/rails/active_storage/blobs/n1/expressway.jpg"
        }),
        json!({
            "id": 2,
            "title": "Road safety week announced",
            "content": "A national road safety week runs in June.",
            "excerpt": "Join the national road safety week.",
            "published_date": "2025-04-12",
            "category": "Announcements",
            "tags": "safety\nawareness\n",
            "is_featured": true,
            "view_count": 310,
            "author": "Road Safety Office",
            "thumbnail_url": "https://cdn.example.org/safety.jpg"
        }),
        json!({
            "id": 3,
            "title": "Bridge inspection results published",
            "excerpt": "Annual inspection of federal bridges is complete.",
            "published_date": "2025-05-15",
            "category": "Announcements",
            "tags": "[\"bridges\",\"inspection\"]",
            "is_featured": false
        }),
        json!({
            "id": 4,
            "title": "Nekemte-Bure road rehabilitation reaches midpoint",
            "category": "Projects",
            "tags": null,
            "thumbnail_url": ""
        }),
    ]
}

pub fn events() -> Vec<Value> {
    (1..=EVENT_COUNT)
        .map(|n| {
            let even = n % 2 == 0;
            let location = if even { "Addis Ababa" } else { "Adama" };
            let event_type = if even { "Workshop" } else { "Conference" };
            let status = if n > 4 { "upcoming" } else { "past" };
            json!({
                "id": n.to_string(),
                "title": format!("Stakeholder Forum {n}"),
                "slug": format!("stakeholder-forum-{n}"),
                "excerpt": "Consultation with road users.",
                "description": format!("Forum {n} on the road network."),
                "image_url": format!("uploads/events/{n}.jpg"),
                "start_date": format!("2025-06-{n:02}"),
                "end_date": format!("2025-06-{:02}", n + 1),
                "location": location,
                "event_type": event_type,
                "status": status,
                "is_featured": n <= 2,
                "registration_required": n % 3 == 0,
                "registration_open": true,
                "capacity": 100 + n,
                "agenda": "Opening remarks\nPresentations\nDiscussion",
                "speakers": ["Director General", null, ""]
            })
        })
        .collect()
}

pub fn bids() -> Vec<Value> {
    vec![
        json!({
            "id": "ICB-2025-01",
            "bid_number": "ICB-2025-01",
            "title": "Design and Construction of Adama-Awash Expressway",
            "category": "Road Construction",
            "type": "International Competitive Bidding",
            "status": "active",
            "publishDate": "2025-03-15",
            "deadlineDate": "2025-05-15",
            "budget": "$320 million",
            "fundingSource": "World Bank",
            "description": "Design and construction of a 90km expressway.",
            "eligibility": [
                "International contractors",
                "Bid security of $3 million required"
            ],
            "contactEmail": "procurement@era.gov.et",
            "documents": [
                {"id": 1, "filename": "bid-document.pdf",
                 "content_type": "application/pdf",
                 "url": "/rails/active_storage/blobs/b1/bid-document.pdf"}
            ]
        }),
        json!({
            "id": 17,
            "bid_number": "NCB-2025-03",
            "title": "Rehabilitation of Nekemte-Bure Road",
            "category": "Road Rehabilitation",
            "type": "National Competitive Bidding",
            "status": "active",
            "publish_date": "2025-04-05",
            "deadline_date": "2025-05-20",
            "budget": 1500000000,
            "funding_source": "Government of Ethiopia",
            "eligibility": "Category 1 contractors\nBid security required"
        }),
        json!({
            "id": 18,
            "bid_number": "NCB-2025-04",
            "title": "Supply of Road Maintenance Equipment",
            "category": "Goods",
            "type": "National Competitive Bidding",
            "status": "active",
            "publish_date": "2025-04-20",
            "deadline_date": "2025-05-25"
        }),
        json!({
            "id": "ICB-2024-09",
            "title": "Upgrading of Jimma-Bonga Road",
            "category": "Road Construction",
            "type": "International Competitive Bidding",
            "status": "closed",
            "publishDate": "2024-10-15",
            "deadlineDate": "2024-12-15",
            "awardStatus": "awarded",
            "awardedTo": "Global Road Builders Consortium",
            "awardDate": "2025-01-15",
            "contractValue": "$82.3 million"
        }),
    ]
}

pub fn projects() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Adama-Awash Expressway",
            "description": "A 90km access-controlled expressway.",
            "location": "Oromia",
            "status": "ongoing",
            "budget": "320000000.00",
            "start_date": "2024-01-10",
            "end_date": "2027-12-31",
            "contractor": "China Communications Construction",
            "project_manager": "Eng. Tesfaye",
            "scope": "Expressway\nSix lanes with three interchanges",
            "milestones": [
                {"title": "Design approval", "completed": true},
                {"title": "Earthworks", "completed": false},
                {"title": "Bridge foundations", "status": "completed"}
            ],
            "challenges": ["Right of way", "Rainy season"],
            "images": [
                {"id": 11, "url": "/rails/active_storage/blobs/p1/cover.jpg",
                 "thumbnail_url": "/rails/active_storage/blobs/p1/thumb.jpg"}
            ],
            "documents": [
                {"id": 5, "filename": "environmental-assessment.pdf",
                 "content_type": "application/pdf",
                 "url": "/rails/active_storage/blobs/p1/eia.pdf"}
            ]
        }),
        json!({
            "id": 2,
            "title": "Modjo-Hawassa Bridges",
            "status": "ongoing",
            "scope": {"type": "Bridge", "description": "Five major bridges"},
            "milestones": "[{\"completed\":true},{\"completed\":false}]"
        }),
        json!({
            "id": 3,
            "title": "Jimma-Bonga Road Upgrade",
            "status": "completed",
            "location": "South West",
            "milestones": [],
            "images": []
        }),
    ]
}

pub fn vacancies() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Senior Highway Engineer",
            "department": "Engineering and Design",
            "location": "Addis Ababa",
            "job_type": "Full-Time",
            "status": "active",
            "deadline": "2025-06-30",
            "posted_date": "2025-05-01T09:00:00Z",
            "description": "Lead highway design reviews.",
            "requirements": "[\"BSc in Civil Engineering\",\"8 years of experience\"]",
            "responsibilities": "Review designs\n\nSupervise consultants\n",
            "benefits": {"health": "Medical insurance", "pension": "Pension"},
            "salary": "Grade XIV"
        }),
        json!({
            "id": 2,
            "title": "Materials Laboratory Technician",
            "department": "Quality Control",
            "location": "Adama",
            "type": "Contract",
            "status": "active",
            "requirements": ["Diploma in Civil Engineering", null, ""],
            "responsibilities": null,
            "benefits": 3
        }),
        json!({
            "id": 3,
            "title": "Procurement Officer",
            "location": "Addis Ababa",
            "status": "expired",
            "deadline": "2025-01-31"
        }),
    ]
}

pub fn districts() -> Vec<Value> {
    (1..=DISTRICT_COUNT)
        .map(|n| {
            let address = format!("P.O. Box {}, Regional Office {n}", 1000 + n);
            let main_image = format!("/rails/active_storage/blobs/d{n}/main.jpg");
            json!({
                "id": n,
                "name": format!("District {n}"),
                "address": address,
                "phone_numbers": "+251 11 000 0000\n+251 11 000 0001",
                "emails": [format!("district{n}@era.gov.et")],
                "social_media_links": "[\"https://facebook.com/era\"]",
                "district_overview": "Maintains federal roads in the region.",
                "is_published": true,
                "meta_keywords": {"a": "roads", "b": "district"},
                "main_image_url": main_image,
                "gallery_images_urls": [format!("uploads/districts/{n}-1.jpg")]
            })
        })
        .collect()
}

pub fn about_us() -> Value {
    json!({
        "title": "About the Roads Administration",
        "subtitle": "Connecting the country",
        "mission": "Build and maintain a safe road network.",
        "vision": "Reliable connectivity for all citizens.",
        "values": [
            "Integrity",
            {"title": "Excellence", "description": "High standards"}
        ],
        "team_members": [
            {"name": "Habtamu Tegegne", "position": "Director General",
             "image_url": "/rails/active_storage/blobs/t1/dg.jpg"}
        ],
        "milestones": [{"year": 2010, "title": "Road Sector Development"}],
        "partners": [{"name": "World Bank"}],
        "hero_image_url": "uploads/hero.jpg",
        "team_images_urls": ["uploads/team1.jpg"],
        "meta": {"title": "About", "keywords": "roads\ninfrastructure"}
    })
}

pub fn admin_users() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "email": "admin@era.gov.et",
            "created_at": "2024-11-02T10:00:00Z",
            "updated_at": "2025-01-05T12:00:00Z"
        }),
        json!({
            "id": 2,
            "email": "editor@era.gov.et",
            "created_at": "2025-02-14T08:15:00Z",
            "updated_at": "2025-02-14T08:15:00Z"
        }),
    ]
}
