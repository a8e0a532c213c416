pub mod cell_key;
pub mod font;
pub mod grid;
pub mod highlight;
pub mod search;
pub mod spell;
pub mod state;
pub mod suggest;
pub mod template;
