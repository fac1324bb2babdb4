// Components module - reusable UI building blocks
//
// Interactive panels own their state and key handling:
// - Search bar: input plus autocomplete dropdown
// - Filter panel: sort, specialities, consultation mode
// - Doctor list: the filtered cards
//
// Shell components are stateless render functions:
// - Title bar: app name, load state, key hints
// - Status bar: result count, share link

pub mod doctor_list;
pub mod filter_panel;
pub mod scrollbar;
pub mod search_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use doctor_list::DoctorList;
pub use filter_panel::FilterPanel;
pub use search_bar::SearchBar;
pub use toast::Toast;
