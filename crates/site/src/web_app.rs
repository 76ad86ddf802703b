use home_page::{messages, HomePage, PageLocation};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host::translate_or;
use platform_host_web::{build_host_services, current_href};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes>
                <Route path="" view=HomeEntry />
            </Routes>
        </Router>
    }
}

#[component]
pub fn HomeEntry() -> impl IntoView {
    let services = build_host_services();
    let location = page_location(current_href());
    let (name_id, default_name) = messages::APP_NAME;
    let (description_id, default_description) = messages::APP_DESCRIPTION;
    let title = translate_or(services.config.as_ref(), name_id, default_name);
    let description = translate_or(services.config.as_ref(), description_id, default_description);

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <HomePage services=services location=location />
    }
}

/// Snapshot of the page URL; an unreadable URL disables legacy redirects.
fn page_location(href: Result<String, String>) -> Option<PageLocation> {
    let parsed = href.and_then(|href| PageLocation::parse(&href).map_err(|err| err.to_string()));
    match parsed {
        Ok(location) => Some(location),
        Err(err) => {
            logging::warn!("page location unavailable: {err}");
            None
        }
    }
}
