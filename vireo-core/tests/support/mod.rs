//! Shared fixture graph for the integration suites.
//!
//! Layout:
//!
//! ```text
//! Media (root folder, logo + 3 backdrops)
//! ├── Crime Nights (series, PG-13, people + studios)
//! │   └── Season 1 (season)
//! │       └── Pilot (episode, own logo)
//! ├── Cars (movie, G)
//! ├── Heat (movie, R, people + studios)
//! └── Vault (folder)
//!     └── Caligula (movie, NC-17)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use vireo_core::{InMemoryImageRegistry, InMemoryLibrary, InMemoryUsers};
use vireo_model::{
    ItemKind, MediaItem, ParentalRating, PersonInfo, User, UserItemData,
};

pub struct Fixture {
    pub library: InMemoryLibrary,
    pub users: InMemoryUsers,
    pub images: InMemoryImageRegistry,
    pub root: Arc<MediaItem>,
    pub series: Arc<MediaItem>,
    pub season: Arc<MediaItem>,
    pub episode: Arc<MediaItem>,
    pub cars: Arc<MediaItem>,
    pub heat: Arc<MediaItem>,
    pub vault: Arc<MediaItem>,
    pub alice: Arc<User>,
    pub kid: Arc<User>,
}

pub fn fixture() -> Fixture {
    let mut library = InMemoryLibrary::new();

    let mut root = MediaItem::new(ItemKind::Folder, "Media");
    root.logo_path = Some(PathBuf::from("/meta/media/logo.png"));
    root.backdrop_paths = vec![
        PathBuf::from("/meta/media/backdrop1.jpg"),
        PathBuf::from("/meta/media/backdrop2.jpg"),
        PathBuf::from("/meta/media/backdrop3.jpg"),
    ];
    let root = library.insert_root(root);

    let mut series = MediaItem::new(ItemKind::Series, "Crime Nights");
    series.parent_id = Some(root.id);
    series.rating = Some(ParentalRating::Pg13);
    series.people = vec![
        PersonInfo::with_role("Al Pacino", "Lead"),
        PersonInfo::new("Nobody Known"),
    ];
    series.studios =
        vec!["Warner Bros.".to_string(), "Obscure Films".to_string()];
    let series = library.insert(series);

    let mut season = MediaItem::new(ItemKind::Season, "Season 1");
    season.parent_id = Some(series.id);
    let season = library.insert(season);

    let mut episode = MediaItem::new(ItemKind::Episode, "Pilot");
    episode.parent_id = Some(season.id);
    episode.logo_path = Some(PathBuf::from("/meta/pilot/logo.png"));
    let episode = library.insert(episode);

    let mut cars = MediaItem::new(ItemKind::Movie, "Cars");
    cars.parent_id = Some(root.id);
    cars.rating = Some(ParentalRating::G);
    let cars = library.insert(cars);

    let mut heat = MediaItem::new(ItemKind::Movie, "Heat");
    heat.parent_id = Some(root.id);
    heat.rating = Some(ParentalRating::R);
    heat.people = vec![
        PersonInfo::new("Robert De Niro"),
        PersonInfo::new("Al Pacino"),
    ];
    heat.studios = vec!["Warner Bros.".to_string()];
    let heat = library.insert(heat);

    let mut vault = MediaItem::new(ItemKind::Folder, "Vault");
    vault.parent_id = Some(root.id);
    let vault = library.insert(vault);

    let mut caligula = MediaItem::new(ItemKind::Movie, "Caligula");
    caligula.parent_id = Some(vault.id);
    caligula.rating = Some(ParentalRating::Nc17);
    library.insert(caligula);

    let mut users = InMemoryUsers::new();
    let mut alice = User::new("alice");
    alice.item_data.insert(
        episode.id,
        UserItemData {
            position_secs: 812.5,
            play_count: 2,
            played: false,
            favorite: true,
        },
    );
    let alice = users.insert(alice);

    let mut kid = User::new("kid");
    kid.max_parental_rating = Some(ParentalRating::Pg13);
    let kid = users.insert(kid);

    let mut images = InMemoryImageRegistry::new();
    images.add_person("Al Pacino", "/ibn/al-pacino.jpg");
    images.add_person("Robert De Niro", "/ibn/de-niro.jpg");
    images.add_studio("Warner Bros.", "/ibn/wb.png");

    Fixture {
        library,
        users,
        images,
        root,
        series,
        season,
        episode,
        cars,
        heat,
        vault,
        alice,
        kid,
    }
}
