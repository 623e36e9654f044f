//! Static storefront content
//!
//! Fixed, non-interactive display data: the order of the layout shell
//! sections, the payment badges and the delivery partner shown in the
//! footer information panel.

/// Sections of the page shell, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSection {
    Topbar,
    Header,
    Navbar,
    /// The routed page (landing or checkout)
    Content,
    Footer,
    SocialBar,
    BottomBar,
}

/// Render order of the layout shell
pub const SHELL_SECTIONS: [ShellSection; 7] = [
    ShellSection::Topbar,
    ShellSection::Header,
    ShellSection::Navbar,
    ShellSection::Content,
    ShellSection::Footer,
    ShellSection::SocialBar,
    ShellSection::BottomBar,
];

pub const STORE_NAME: &str = "GREEN Supermarket";

/// Card network / wallet logo shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentBadge {
    pub id: u8,
    pub image: &'static str,
    pub alt: &'static str,
}

pub const PAYMENT_BADGES: [PaymentBadge; 3] = [
    PaymentBadge {
        id: 1,
        image: "images/footerImages/Visa.png",
        alt: "Visa",
    },
    PaymentBadge {
        id: 2,
        image: "images/footerImages/PayPal.png",
        alt: "PayPal",
    },
    PaymentBadge {
        id: 3,
        image: "images/footerImages/Mastercard Logo.png",
        alt: "MasterCard",
    },
];

pub const PAYMENT_BLURB: [&str; 2] = [
    "Experience secure and convenient transactions with GREEN Supermarket Online.",
    "Choose from a variety of payment methods to suit your preferences.",
];

/// Delivery partner shown beside the payment badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryService {
    pub image: &'static str,
    pub alt: &'static str,
    pub description: &'static str,
}

pub const DELIVERY_SERVICE: DeliveryService = DeliveryService {
    image: "images/footerImages/DHL img.png",
    alt: "DHL",
    description:
        "Swift and reliable, our partnership with DHL ensures your orders reach you with speed and care",
};

pub const SOCIAL_LINKS: [&str; 4] = ["Facebook", "Instagram", "X", "YouTube"];
