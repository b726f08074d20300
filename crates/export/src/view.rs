//! Read model of the point-of-sale screen.

use cart::{CartSnapshot, Money, Product};
use common::{SessionProvider, StaffUser};

/// Visual weight of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// The staff header.
    Title,
    /// Section names and item names.
    Heading,
    /// Item details and the total.
    Body,
    /// Vertical space between blocks.
    Gap,
}

/// One line of text as the screen shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    pub style: LineStyle,
}

impl ViewLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn gap() -> Self {
        Self::new("", LineStyle::Gap)
    }
}

/// Everything the cashier currently sees: staff header, catalog, cart and
/// the running total.
#[derive(Debug, Clone, Default)]
pub struct PosView {
    pub staff: Option<StaffUser>,
    pub catalog: Vec<Product>,
    pub cart: CartSnapshot,
}

impl PosView {
    pub fn new(staff: Option<StaffUser>, catalog: Vec<Product>, cart: CartSnapshot) -> Self {
        Self {
            staff,
            catalog,
            cart,
        }
    }

    /// Captures the view with the staff user taken from the session.
    pub fn capture<S>(session: &S, catalog: &[Product], cart: CartSnapshot) -> Self
    where
        S: SessionProvider + ?Sized,
    {
        Self::new(session.current_user(), catalog.to_vec(), cart)
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price
    }

    /// Renders the view top to bottom.
    pub fn render_lines(&self) -> Vec<ViewLine> {
        let mut lines = Vec::with_capacity(4 + self.catalog.len() * 5 + self.cart.lines.len() * 4);

        let header = match &self.staff {
            Some(user) => format!("Staff: {user}"),
            None => "Staff:".to_string(),
        };
        lines.push(ViewLine::new(header, LineStyle::Title));
        lines.push(ViewLine::gap());

        lines.push(ViewLine::new("Products", LineStyle::Heading));
        for product in &self.catalog {
            lines.push(ViewLine::new(product.name.clone(), LineStyle::Heading));
            lines.push(ViewLine::new(
                format!("Description: {}", product.description),
                LineStyle::Body,
            ));
            lines.push(ViewLine::new(
                format!("Flavor: {}", product.flavor),
                LineStyle::Body,
            ));
            lines.push(ViewLine::new(
                format!("Price: {}$", product.price.plain()),
                LineStyle::Body,
            ));
            lines.push(ViewLine::gap());
        }

        lines.push(ViewLine::new("Cart", LineStyle::Heading));
        for line in &self.cart.lines {
            lines.push(ViewLine::new(line.product.name.clone(), LineStyle::Heading));
            lines.push(ViewLine::new(
                format!("Price: {}$", line.unit_price().plain()),
                LineStyle::Body,
            ));
            lines.push(ViewLine::new(
                format!("Quantity: {}", line.quantity),
                LineStyle::Body,
            ));
            lines.push(ViewLine::gap());
        }

        lines.push(ViewLine::new(
            format!("Total Price: {}$", self.cart.total_price.plain()),
            LineStyle::Body,
        ));
        lines
    }
}
