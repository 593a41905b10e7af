mod all;
mod footer;
mod information;
mod log;
mod main;
mod projects;
mod toast;

use self::log::log;
use super::*;
use footer::footer;
use main::main;
use toast::toast;

pub use all::all as render;
