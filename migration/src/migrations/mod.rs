pub mod m202601100001_create_users;
pub mod m202601100002_create_organizations;
pub mod m202601100003_create_organization_members;
pub mod m202601100004_create_subscriptions;
pub mod m202601120001_create_events;
pub mod m202601150001_create_attendance_records;
