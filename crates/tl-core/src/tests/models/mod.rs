mod link_profile;
