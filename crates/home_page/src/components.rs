use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::*;
use platform_host::{
    HostServices, HubCreateRequest, HubLauncher, InstallOutcome, InstallPrompt, RoomRecord,
};
use system_ui::prelude::*;

use crate::{
    featured::featured_rooms,
    legacy_redirect::{plan_legacy_redirects, run_legacy_redirects, LegacyRedirectGuard},
    location::PageLocation,
    view_model::{FeaturePanel, HomeViewModel, RoomTile, HAVE_CODE_HREF},
};

/// Collapses a room listing failure into an empty listing.
pub(crate) fn rooms_or_empty(
    source: &str,
    result: Result<Vec<RoomRecord>, String>,
) -> Vec<RoomRecord> {
    match result {
        Ok(rooms) => rooms,
        Err(err) => {
            logging::warn!("{source} room listing failed: {err}");
            Vec::new()
        }
    }
}

/// Creates an unnamed hub from the create-room button.
pub(crate) async fn create_room(hubs: &dyn HubLauncher) {
    if let Err(err) = hubs.create_and_redirect(HubCreateRequest::unnamed()).await {
        logging::warn!("create room failed: {err}");
    }
}

/// Shows the install prompt from the install button.
pub(crate) async fn prompt_install(install: &dyn InstallPrompt) -> Option<InstallOutcome> {
    match install.prompt().await {
        Ok(outcome) => {
            logging::log!("install prompt outcome: {outcome:?}");
            Some(outcome)
        }
        Err(err) => {
            logging::warn!("install prompt failed: {err}");
            None
        }
    }
}

/// Wires room loading, featured aggregation, and one-shot legacy redirects for a page mount.
///
/// Must run inside a reactive owner. Without a readable `location` no redirect is attempted.
pub fn use_home_view_model(
    services: &HostServices,
    location: Option<PageLocation>,
) -> Memo<HomeViewModel> {
    let rooms = services.rooms.clone();
    let favorites = create_local_resource(
        || (),
        move |_| {
            let rooms = rooms.clone();
            async move { rooms_or_empty("favorite", rooms.favorite_rooms().await) }
        },
    );
    let rooms = services.rooms.clone();
    let public = create_local_resource(
        || (),
        move |_| {
            let rooms = rooms.clone();
            async move { rooms_or_empty("public", rooms.public_rooms().await) }
        },
    );

    let featured = create_memo(move |_| {
        featured_rooms(
            &favorites.get().unwrap_or_default(),
            &public.get().unwrap_or_default(),
        )
    });

    let view_model = {
        let auth = services.auth.clone();
        let config = services.config.clone();
        let thumbnails = services.thumbnails.clone();
        create_memo(move |_| {
            featured.with(|featured| {
                HomeViewModel::build(featured, &auth, config.as_ref(), thumbnails.as_ref())
            })
        })
    };

    let guard = LegacyRedirectGuard::default();
    let navigator = services.navigator.clone();
    let hubs = services.hubs.clone();
    create_effect(move |_| {
        if !guard.try_claim() {
            return;
        }
        let Some(plan) = location.as_ref().map(plan_legacy_redirects) else {
            return;
        };
        if plan.is_empty() {
            return;
        }
        let navigator = navigator.clone();
        let hubs = hubs.clone();
        spawn_local(async move {
            run_legacy_redirects(&plan, navigator.as_ref(), hubs.as_ref()).await;
        });
    });

    view_model
}

#[component]
/// Landing page: hero, feature panels, featured room grid, and room-code link.
pub fn HomePage(services: HostServices, location: Option<PageLocation>) -> impl IntoView {
    logging::log!("home page mounted on {} host", services.host_strategy.as_str());
    let view_model = use_home_view_model(&services, location);

    let hubs = services.hubs.clone();
    let install = services.install.clone();

    view! {
        <PageContainer layout_class="home-page" ui_slot="home">
            <Container padding=LayoutPadding::Lg layout_class="home-hero" ui_slot="hero">
                <Stack gap=LayoutGap::Lg align=LayoutAlign::Center>
                    {move || {
                        view_model
                            .with(|vm| vm.app_description.clone())
                            .map(|description| {
                                view! {
                                    <Text role=TextRole::Title ui_slot="app-description">
                                        {description}
                                    </Text>
                                }
                            })
                    }}
                    <Cluster gap=LayoutGap::Md justify=LayoutJustify::Center ui_slot="hero-actions">
                        {move || {
                            let hubs = hubs.clone();
                            view_model
                                .with(|vm| vm.can_create_rooms.then(|| vm.create_room_label.clone()))
                                .map(|label| view! { <CreateRoomButton hubs=hubs label=label /> })
                        }}
                        <InstallAppButton
                            install=install
                            label=Signal::derive(move || {
                                view_model.with(|vm| vm.install_app_label.clone())
                            })
                        />
                    </Cluster>
                </Stack>
                {move || {
                    view_model
                        .with(|vm| vm.hero_image_url.clone())
                        .map(|src| {
                            view! { <Image src=src layout_class="home-hero-image" ui_slot="hero-image" /> }
                        })
                }}
            </Container>

            {move || {
                let panels = view_model.with(|vm| vm.feature_panels.clone());
                (!panels.is_empty())
                    .then(|| {
                        view! {
                            <Grid gap=LayoutGap::Lg layout_class="home-feature-panels" ui_slot="feature-panels">
                                {panels
                                    .into_iter()
                                    .map(|panel| view! { <FeaturePanelCard panel=panel /> })
                                    .collect_view()}
                            </Grid>
                        }
                    })
            }}

            <Show when=move || view_model.with(HomeViewModel::show_room_grid)>
                <Grid gap=LayoutGap::Md center=true layout_class="home-room-grid" ui_slot="room-grid">
                    <For
                        each=move || view_model.with(|vm| vm.room_tiles.clone())
                        key=|tile| tile.id.clone()
                        children=|tile| view! { <RoomTileCard tile=tile /> }
                    />
                </Grid>
            </Show>

            <Cluster justify=LayoutJustify::Center padding=LayoutPadding::Lg ui_slot="have-code">
                <LinkButton href=HAVE_CODE_HREF variant=ButtonVariant::Accent size=ButtonSize::Lg>
                    {move || view_model.with(|vm| vm.have_code_label.clone())}
                </LinkButton>
            </Cluster>
        </PageContainer>
    }
}

#[component]
fn CreateRoomButton(hubs: Rc<dyn HubLauncher>, label: String) -> impl IntoView {
    let creating = create_rw_signal(false);
    let on_click = Callback::new(move |_: MouseEvent| {
        if creating.get_untracked() {
            return;
        }
        creating.set(true);
        let hubs = hubs.clone();
        spawn_local(async move {
            create_room(hubs.as_ref()).await;
            creating.set(false);
        });
    });

    view! {
        <Button
            variant=ButtonVariant::Primary
            size=ButtonSize::Xl
            ui_slot="create-room"
            disabled=Signal::derive(move || creating.get())
            on_click=on_click
        >
            {label}
        </Button>
    }
}

#[component]
fn InstallAppButton(
    install: Rc<dyn InstallPrompt>,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    let on_click = Callback::new(move |_: MouseEvent| {
        let install = install.clone();
        spawn_local(async move {
            prompt_install(install.as_ref()).await;
        });
    });

    view! {
        <Button variant=ButtonVariant::Quiet size=ButtonSize::Lg ui_slot="install-app" on_click=on_click>
            {move || label.get()}
        </Button>
    }
}

#[component]
fn FeaturePanelCard(panel: FeaturePanel) -> impl IntoView {
    view! {
        <Card gap=LayoutGap::Sm layout_class="home-feature-panel" ui_slot=panel.kind.image_key()>
            {panel
                .image_url
                .map(|src| view! { <Image src=src alt=panel.title.clone() ui_slot="feature-image" /> })}
            <Heading level=HeadingLevel::H3>{panel.title}</Heading>
            <Text tone=TextTone::Secondary>{panel.body}</Text>
        </Card>
    }
}

#[component]
fn RoomTileCard(tile: RoomTile) -> impl IntoView {
    let occupancy = tile.occupancy_label();
    view! {
        <a class="home-room-tile" href=tile.url data-room-id=tile.id>
            <Card gap=LayoutGap::Sm padding=LayoutPadding::Sm>
                <Image src=tile.thumbnail_url alt=tile.name.clone() ui_slot="room-thumbnail" />
                <Text role=TextRole::Label>{tile.name}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{occupancy}</Text>
            </Card>
        </a>
    }
}
