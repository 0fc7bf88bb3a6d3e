pub mod activity_grid;
pub mod city_search;
pub mod empty_prompt;
pub mod header;
pub mod help_bar;
pub mod notice;
pub mod skeleton;
pub mod weather_panel;
pub mod weather_view;

pub use crate::component::Component;

pub use activity_grid::{ActivityGrid, ActivityGridProps, GRID_TITLE};
pub use city_search::{CitySearch, CitySearchProps, PLACEHOLDER, SPINNERS};
pub use empty_prompt::{EmptyPrompt, EmptyPromptProps, PROMPT_BODY, PROMPT_TITLE};
pub use header::{Header, HeaderProps, APP_TITLE, TAGLINE};
pub use help_bar::{HelpBar, HelpBarProps};
pub use notice::{NoticeModal, NoticeModalProps};
pub use skeleton::{Skeleton, SHADE};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
pub use weather_view::{WeatherView, WeatherViewProps};
