pub mod activity_cleaner;
pub mod date_deriver;
pub mod pipeline;
pub mod referral_extractor;

pub use activity_cleaner::{ActivityCleaner, CleanedActivities};
pub use date_deriver::DateFeatureDeriver;
pub use pipeline::Pipeline;
pub use referral_extractor::{ReferralExtraction, ReferralExtractor};
