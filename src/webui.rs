use crate::display::{ActivityKind, TransportKind};
use crate::error::Error;
use crate::itinerary::{FieldNames, ItineraryRecord};
use crate::itinerary_manager::ItineraryConfig;
use crate::maps;
use crate::maps::MapLinkConfig;
use crate::state_manager::{ViewState, ViewStateManager};

use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::{get, routes, Build, Rocket, State};
use rocket_dyn_templates::{context, Template};
use serde::Serialize;
use serde_json::json;
use tokio::sync::mpsc;

use std::sync::Arc;

#[derive(Serialize)]
struct EntryContext {
    time: String,
    activity: String,
    place: String,
    transport: String,
    alternative: String,
    map_url: Option<String>,
    icon_class: &'static str,
    transport_class: &'static str,
}

fn entry_context(
    record: &ItineraryRecord,
    names: &FieldNames,
    maps_config: &MapLinkConfig,
) -> EntryContext {
    EntryContext {
        time: record.time(names).to_string(),
        activity: record.activity(names).to_string(),
        place: record.place(names).to_string(),
        transport: record.transport(names).to_string(),
        alternative: record.alternative(names).to_string(),
        map_url: maps::link_for(record.place(names), maps_config),
        icon_class: ActivityKind::for_activity(record.activity(names)).css_class(),
        transport_class: TransportKind::for_transport(record.transport(names)).css_class(),
    }
}

#[get("/")]
fn index(
    view_state: &State<Arc<ViewStateManager>>,
    config: &State<ItineraryConfig>,
) -> Template {
    let state = view_state.read();
    match &*state {
        ViewState::Loading => Template::render(
            "index",
            context! {
                title: config.title.clone(),
                state: "loading",
            },
        ),
        ViewState::Error => Template::render(
            "index",
            context! {
                title: config.title.clone(),
                state: "error",
            },
        ),
        ViewState::Ready {
            itinerary,
            selected_day,
            loaded_at,
        } => {
            let names = itinerary.names();
            let entries: Vec<EntryContext> = match selected_day {
                Some(day) => itinerary
                    .for_day(day)
                    .map(|record| entry_context(record, names, &config.maps))
                    .collect(),
                None => Vec::new(),
            };
            Template::render(
                "index",
                context! {
                    title: config.title.clone(),
                    state: "ready",
                    days: itinerary.day_labels(),
                    selected_day: selected_day.clone().unwrap_or_default(),
                    entries,
                    loaded_at: loaded_at.format("%H:%M %Z").to_string(),
                },
            )
        }
    }
}

#[get("/day/<label>")]
fn select_day(label: &str, view_state: &State<Arc<ViewStateManager>>) -> Redirect {
    view_state.select_day(label);
    Redirect::to("/")
}

// a retry while no manager is listening (or one is already queued) is
// dropped silently
#[get("/retry")]
fn retry(retry_tx: &State<mpsc::Sender<()>>) -> Redirect {
    let _ = retry_tx.try_send(());
    Redirect::to("/")
}

#[get("/api/itinerary")]
fn api(view_state: &State<Arc<ViewStateManager>>) -> Json<serde_json::Value> {
    let state = view_state.read();
    match &*state {
        ViewState::Loading => Json(json!({ "state": "loading" })),
        ViewState::Error => Json(json!({ "state": "error" })),
        ViewState::Ready {
            itinerary,
            selected_day,
            loaded_at,
        } => Json(json!({
            "state": "ready",
            "days": itinerary.day_labels(),
            "selected_day": selected_day,
            "loaded_at": loaded_at.to_rfc3339(),
            "records": itinerary.records(),
        })),
    }
}

pub fn build(
    view_state: Arc<ViewStateManager>,
    retry_tx: mpsc::Sender<()>,
    config: ItineraryConfig,
) -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![index, select_day, retry, api])
        .attach(Template::fairing())
        .manage(view_state)
        .manage(retry_tx)
        .manage(config)
}

pub async fn rocket(
    view_state: Arc<ViewStateManager>,
    retry_tx: mpsc::Sender<()>,
    config: ItineraryConfig,
) -> Result<(), Error> {
    build(view_state, retry_tx, config).launch().await?;

    Ok(())
}
