//! The bakery menu.

/// A product that can be added to the cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: f64,
    pub image: &'static str,
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        name: "Baguette",
        price: 3.0,
        image: "https://images.unsplash.com/photo-1608198093002-1a5c14f2bdf2",
    },
    MenuItem {
        name: "Pretzel",
        price: 2.5,
        image: "https://images.unsplash.com/photo-1608197951274-bb80d68bfb9b",
    },
    MenuItem {
        name: "Chocolate Cake",
        price: 12.0,
        image: "https://images.unsplash.com/photo-1608032075811-34e54e1e6e60",
    },
    MenuItem {
        name: "Whole Wheat Bread",
        price: 4.0,
        image: "https://images.unsplash.com/photo-1608198202043-0882f8b5cb3f",
    },
];

/// Find a menu item by name, ignoring case and surrounding whitespace.
pub fn find(name: &str) -> Option<&'static MenuItem> {
    let name = name.trim();
    MENU.iter().find(|item| item.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find("baguette").map(|i| i.price), Some(3.0));
        assert_eq!(find("  CHOCOLATE cake ").map(|i| i.name), Some("Chocolate Cake"));
        assert!(find("Croissant").is_none());
    }

    #[test]
    fn test_menu_names_unique() {
        for (i, a) in MENU.iter().enumerate() {
            assert!(MENU[i + 1..].iter().all(|b| b.name != a.name));
        }
    }
}
