use mockall::mock;
use uuid::Uuid;

use crate::models::{BookingFields, DbMentorshipConfig, DbMentorshipSlot, DbUser, SlotFilter};

// Mock repositories for testing
mock! {
    pub SlotRepo {
        pub async fn get_slot_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbMentorshipSlot>>;

        pub async fn list_slots_by_mentor(
            &self,
            mentor_id: &'static str,
            filter: SlotFilter,
        ) -> eyre::Result<Vec<DbMentorshipSlot>>;

        pub async fn list_slots_by_hacker(
            &self,
            hacker_id: &'static str,
            filter: SlotFilter,
        ) -> eyre::Result<Vec<DbMentorshipSlot>>;

        pub async fn count_future_bookings(
            &self,
            hacker_id: &'static str,
            now: i64,
        ) -> eyre::Result<i64>;

        pub async fn get_slots_for_update(
            &self,
            ids: Vec<Uuid>,
        ) -> eyre::Result<Vec<DbMentorshipSlot>>;

        pub async fn update_booking_fields(
            &self,
            id: Uuid,
            fields: BookingFields,
        ) -> eyre::Result<()>;

        pub async fn clear_booking_fields(
            &self,
            id: Uuid,
        ) -> eyre::Result<()>;

        pub async fn update_mentor_annotations(
            &self,
            id: Uuid,
            mentor_notes: Option<&'static str>,
            mentor_mark_as_done: Option<bool>,
            mentor_mark_as_afk: Option<bool>,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub UserRepo {
        pub async fn get_user_by_id(
            &self,
            id: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn list_mentors(
            &self,
            limit: Option<i64>,
        ) -> eyre::Result<Vec<DbUser>>;
    }
}

mock! {
    pub ConfigRepo {
        pub async fn get_mentorship_config(
            &self,
        ) -> eyre::Result<Option<DbMentorshipConfig>>;

        pub async fn set_mentorship_config(
            &self,
            is_mentorship_open: bool,
            start_date: i64,
            end_date: i64,
        ) -> eyre::Result<()>;
    }
}
