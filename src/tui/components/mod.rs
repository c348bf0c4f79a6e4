//! # Screen Widgets
//!
//! Everything here draws data handed to it from the `View` built by
//! `core::view::render`; nothing reaches into `App`.
//!
//! - `TitleBar` and `ResultsCard` are plain props-in, pixels-out widgets.
//! - `OptionList` pairs a persistent `OptionListState` (kept in `TuiState`)
//!   with a wrapper rebuilt every frame. Its state turns key presses into
//!   `ListEvent::Activate(index)`; the event loop looks up the action.
//!
//! ```rust,ignore
//! let items = view.actionable();
//! OptionList::new(&mut tui.options, &items).render(frame, area);
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod option_list;
pub use option_list::{ListEvent, OptionList, OptionListState};
pub mod results_card;
pub use results_card::ResultsCard;
