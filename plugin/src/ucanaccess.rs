use dsc_core::DescriptorDecl;

/// MS Access files through the UCanAccess JDBC driver.
pub const UCANACCESS: DescriptorDecl = DescriptorDecl {
    alias: "ucanaccess",
    translator_name: "ucanaccess",
    driver_class_names: &["net.ucanaccess.jdbc.UcanaccessDriver"],
    default_url: "jdbc:ucanaccess://c:/data/pippo.mdb;memory=false",
    is_jdbc: true,
};
