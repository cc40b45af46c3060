//! Pre-built test data for common entities

use rust_decimal_macros::dec;

use core_kernel::Money;

/// Receipt text fixtures mimicking real OCR output
pub struct ReceiptFixtures;

impl ReceiptFixtures {
    /// A clean four-item receipt with GST summary block
    pub fn standard() -> &'static str {
        "SPICE GARDEN RESTAURANT\n\
         Paneer Tikka 2 340.00\n\
         Butter Chicken 1 425.00\n\
         Garlic Naan 4 240.00\n\
         Lassi 90.00\n\
         Sub Total 1,095.00\n\
         CGST @2.5% 27.38\n\
         SGST @2.5% 27.38\n\
         Grand Total 1,149.76"
    }

    /// A receipt where the OCR produced mostly garbage
    pub fn noisy() -> &'static str {
        "~~~ RECEIPT ~~~\n\
         |||###|||\n\
         Masala Dosa 120.00\n\
         #@!%\n\
         Total due soon"
    }

    /// Recognized text with no usable lines at all
    pub fn unusable() -> &'static str {
        "blurry photo\nno amounts here\n1234567"
    }
}

/// Money amount fixtures
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn item_price() -> Money {
        Money::new(dec!(340.00))
    }

    pub fn tax_total() -> Money {
        Money::new(dec!(54.76))
    }

    pub fn tip_total() -> Money {
        Money::new(dec!(100.00))
    }
}
