/// File names
pub const INPUT_FILE: &str = "Datathon - CHA activities 2016-2020.csv";
pub const REFERRALS_FILE: &str = "referrals.csv";
pub const ACTIVITIES_FILE: &str = "activities.csv";

/// Source column names
pub const COL_HUB_RANDOM_ID: &str = "HubRandomID";
pub const COL_HUB_ACTIVITY_ID: &str = "Hub_ActivityID";
pub const COL_CATEGORY_NAME: &str = "CategoryName";
pub const COL_PROGRAMME_NAME: &str = "ProgrammeName";
pub const COL_ACTIVITY_DATE: &str = "ActivityDate";
pub const COL_CHILD_PARTICIPANTS: &str = "ChildParticipants";
pub const COL_ADULT_PARTICIPANTS: &str = "AdultParticipants";
pub const COL_REFERRAL_PARTICIPANTS: &str = "ReferralParticipants";
pub const COL_ENGAGED_COUNT: &str = "EngagedCount";
pub const COL_EXTERNAL_VOLUNTEERS: &str = "ExternalVolunteers";
pub const COL_HUB_VOLUNTEERS: &str = "HubVolunteers";
pub const COL_SCHOOL_VOLUNTEERS: &str = "SchoolVolunteers";

/// Count columns, in the order they are stored on a record
pub const COUNT_COLUMNS: [&str; 7] = [
    COL_CHILD_PARTICIPANTS,
    COL_ADULT_PARTICIPANTS,
    COL_REFERRAL_PARTICIPANTS,
    COL_ENGAGED_COUNT,
    COL_EXTERNAL_VOLUNTEERS,
    COL_HUB_VOLUNTEERS,
    COL_SCHOOL_VOLUNTEERS,
];

/// Derived column names, in output order
pub const DERIVED_COLUMNS: [&str; 6] = [
    "year",
    "quarter",
    "month",
    "year_quarter",
    "year_month",
    "week_start",
];

/// Category values
pub const CATEGORY_SERVICE_REFERRALS: &str = "Service Referrals";
pub const CATEGORY_PROGRAMMED_ACTIVITIES: &str = "Programmed Activities";

/// Referral programmes that only record head counts
pub const HEAD_COUNT_PROGRAMMES: [&str; 4] = [
    "Number of families participating in the Hub",
    "Adults",
    "Children",
    "Participants who gained employment",
];

/// Output date format
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted ActivityDate formats, in inference order (month-first before day-first)
pub const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y%m%d",
];

/// Optional time suffixes on ActivityDate values; the time part is discarded
pub const TIME_SUFFIXES: [&str; 2] = [" %H:%M:%S", " %H:%M"];

/// Cell values read as missing, matching the default missing-value markers of
/// common spreadsheet and dataframe exports
pub const NULL_TOKENS: [&str; 20] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "NaT",
];
