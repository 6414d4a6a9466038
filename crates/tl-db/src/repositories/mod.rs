pub mod link_profile_repository;
