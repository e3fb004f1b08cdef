// Console logging and timing. In the browser everything goes to the dev tools
// console; native builds (unit tests) print to stderr and skip the timers.

#[cfg(target_arch = "wasm32")]
use web_sys::console;

macro_rules! log {
    ( $( $t:tt )* ) => {
        $crate::logging::log(&format!( $( $t )* ))
    };
}

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    eprintln!("{}", message);
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(target_arch = "wasm32")]
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        console::time_end_with_label(self.name);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = self.name;
    }
}
