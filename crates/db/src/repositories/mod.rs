//! Per-table repositories.
//!
//! Each repository is a zero-sized struct providing async query methods
//! against a `PgPool`. State transitions are expressed as guarded UPDATEs
//! (status predicates, row locks) so concurrent callers cannot both win.

pub mod analytics_repo;
pub mod assessment_item_repo;
pub mod assessment_repo;
pub mod audit_repo;
pub mod candidate_repo;
pub mod game_repo;
pub mod game_session_repo;
pub mod job_role_repo;
pub mod tenant_repo;
pub mod user_repo;

pub use analytics_repo::AnalyticsRepo;
pub use assessment_item_repo::AssessmentItemRepo;
pub use assessment_repo::AssessmentRepo;
pub use audit_repo::AuditLogRepo;
pub use candidate_repo::CandidateRepo;
pub use game_repo::GameRepo;
pub use game_session_repo::GameSessionRepo;
pub use job_role_repo::JobRoleRepo;
pub use tenant_repo::TenantRepo;
pub use user_repo::UserRepo;
