//! Custom widget components

mod checkout_form;
mod home;
mod notification;
mod payment_delivery;
mod shell;

pub use checkout_form::{CheckoutForm, FailureBanner};
pub use home::{HomePage, PendingCheckout};
pub use notification::NotificationToast;
pub use payment_delivery::PaymentDeliveryPanel;
pub use shell::{BottomBar, Navbar, SocialBar, StoreHeader, Topbar};
