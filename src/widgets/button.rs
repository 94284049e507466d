use super::*;

/// A button with a label and a click event that takes at most CLICK_CAPACITY handlers
pub struct Button {
    text: String,
    click: BoundedNotifier<()>,
    console: Console,
}

impl Button {
    pub fn new(console: Console) -> Self {
        Self {
            text: String::new(),
            click: BoundedNotifier::new(),
            console,
        }
    }

    #[allow(dead_code)]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Subscribe click handlers here. Handlers past the capacity are dropped without complaint.
    pub fn click_event(&self) -> &BoundedNotifier<()> {
        &self.click
    }

    /// Prints the click, then runs the handlers in the order they subscribed
    pub fn click(&self) -> Result<(), Box<dyn Error>> {
        self.console
            .print_line(&format!("Button clicked: {}", self.text));
        self.click.publish(&())
    }
}
