//! # Mapping Service
//!
//! Lexware Office の会社コンタクトを Autotask の会社エンティティへ
//! 変換する純粋なドメインサービス
//!
//! ソースに欠けているフィールドは設定既定値で補完し、宛先スキーマの
//! 必須フィールドを常に満たす。I/Oは行わない。

use crate::domain::entities::at_company::{AtCompany, AtContact};
use crate::domain::entities::lex_contact::{ContactPerson, LexContact};
use crate::domain::error::SyncError;

/// Autotask の companyType: 顧客
const COMPANY_TYPE_CUSTOMER: i32 = 1;

/// マッピング時のフォールバック既定値
///
/// いずれも設定から供給され、ソース側の値では上書きされない
#[derive(Debug, Clone)]
pub struct MappingDefaults {
    /// 作成・更新されるすべての会社に設定される担当リソースID
    pub owner_resource_id: i64,
    /// ソースに電話番号がない場合の既定電話番号
    pub default_phone: String,
}

/// マッピングサービス
pub struct MappingService;

impl MappingService {
    /// 会社コンタクトを Autotask の会社へマッピングする
    ///
    /// # Errors
    ///
    /// 会社名が空、またはアーカイブ済みのコンタクトの場合に
    /// `SyncError::Validation` を返す
    pub fn map_company(
        contact: &LexContact,
        defaults: &MappingDefaults,
    ) -> Result<AtCompany, SyncError> {
        if contact.name.trim().is_empty() {
            return Err(SyncError::Validation(format!(
                "contact {} has no company name",
                contact.id
            )));
        }
        if contact.archived {
            return Err(SyncError::Validation(format!(
                "contact {} is archived",
                contact.id
            )));
        }

        let shipping = contact.primary_shipping_address();
        let billing = contact.primary_billing_address();

        Ok(AtCompany {
            company_name: contact.name.clone(),
            company_number: contact.customer_number.clone(),
            owner_resource_id: defaults.owner_resource_id,
            company_type: COMPANY_TYPE_CUSTOMER,
            phone: contact
                .primary_phone()
                .map(str::to_string)
                .unwrap_or_else(|| defaults.default_phone.clone()),
            fax: contact.primary_fax().map(str::to_string),
            tax_id: contact.tax_number.clone(),
            address1: shipping.and_then(|a| a.street.clone()),
            city: shipping.and_then(|a| a.city.clone()),
            postal_code: shipping.and_then(|a| a.zip.clone()),
            country_code: shipping.and_then(|a| a.country_code.clone()),
            billing_address1: billing.and_then(|a| a.street.clone()),
            bill_to_city: billing.and_then(|a| a.city.clone()),
            bill_to_zip_code: billing.and_then(|a| a.zip.clone()),
            bill_to_country_code: billing.and_then(|a| a.country_code.clone()),
            contacts: Self::map_contacts(&contact.contact_persons),
        })
    }

    /// 担当者をマッピングする
    ///
    /// 姓名のどちらも無い担当者はスキップする
    pub fn map_contacts(persons: &[ContactPerson]) -> Vec<AtContact> {
        persons
            .iter()
            .filter(|p| p.first_name.is_some() || p.last_name.is_some())
            .map(|p| AtContact {
                first_name: p.first_name.clone().unwrap_or_default(),
                last_name: p.last_name.clone().unwrap_or_default(),
                email_address: p.email_address.clone(),
                phone: p.phone_number.clone(),
                primary_contact: p.primary,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::lex_contact::Address;

    fn defaults() -> MappingDefaults {
        MappingDefaults {
            owner_resource_id: 29683468,
            default_phone: "+49-000".to_string(),
        }
    }

    fn create_test_contact() -> LexContact {
        LexContact {
            id: "e9066f04-8cc7-4616-93f8-ac9ecc8479c8".to_string(),
            organization_id: None,
            version: 1,
            customer_number: Some("10307".to_string()),
            name: "Acme GmbH".to_string(),
            tax_number: Some("111/5702/2147".to_string()),
            vat_id: Some("DE123456789".to_string()),
            allow_tax_free_invoices: None,
            contact_persons: vec![ContactPerson {
                salutation: Some("Herr".to_string()),
                first_name: Some("Max".to_string()),
                last_name: Some("Mustermann".to_string()),
                primary: true,
                email_address: Some("max@acme.example".to_string()),
                phone_number: Some("+49-444".to_string()),
            }],
            email_addresses: vec![],
            phone_numbers: vec!["+49-111".to_string()],
            fax_numbers: vec!["+49-333".to_string()],
            note: None,
            archived: false,
            billing_addresses: vec![Address {
                street: Some("Rechnungsweg 1".to_string()),
                zip: Some("12345".to_string()),
                city: Some("Berlin".to_string()),
                country_code: Some("DE".to_string()),
            }],
            shipping_addresses: vec![Address {
                street: Some("Lieferstr. 2".to_string()),
                zip: Some("54321".to_string()),
                city: Some("Hamburg".to_string()),
                country_code: Some("DE".to_string()),
            }],
        }
    }

    #[test]
    fn test_map_company_copies_fields() {
        let company = MappingService::map_company(&create_test_contact(), &defaults()).unwrap();

        assert_eq!(company.company_name, "Acme GmbH");
        assert_eq!(company.company_number.as_deref(), Some("10307"));
        assert_eq!(company.tax_id.as_deref(), Some("111/5702/2147"));
        assert_eq!(company.phone, "+49-111");
        assert_eq!(company.fax.as_deref(), Some("+49-333"));
        assert_eq!(company.company_type, 1);
    }

    #[test]
    fn test_map_company_required_fields_always_present() {
        // A source with nothing but a name still produces a company
        // satisfying the destination's required-field set.
        let contact = LexContact {
            customer_number: None,
            tax_number: None,
            vat_id: None,
            contact_persons: vec![],
            phone_numbers: vec![],
            fax_numbers: vec![],
            billing_addresses: vec![],
            shipping_addresses: vec![],
            ..create_test_contact()
        };

        let company = MappingService::map_company(&contact, &defaults()).unwrap();

        assert_eq!(company.company_name, "Acme GmbH");
        assert!(!company.phone.is_empty());
        assert_eq!(company.owner_resource_id, 29683468);
    }

    #[test]
    fn test_map_company_falls_back_to_default_phone() {
        let mut contact = create_test_contact();
        contact.phone_numbers.clear();

        let company = MappingService::map_company(&contact, &defaults()).unwrap();

        assert_eq!(company.phone, "+49-000");
    }

    #[test]
    fn test_map_company_owner_always_from_configuration() {
        let company = MappingService::map_company(&create_test_contact(), &defaults()).unwrap();
        assert_eq!(company.owner_resource_id, 29683468);
    }

    #[test]
    fn test_map_company_splits_shipping_and_billing() {
        let company = MappingService::map_company(&create_test_contact(), &defaults()).unwrap();

        assert_eq!(company.address1.as_deref(), Some("Lieferstr. 2"));
        assert_eq!(company.city.as_deref(), Some("Hamburg"));
        assert_eq!(company.postal_code.as_deref(), Some("54321"));
        assert_eq!(company.billing_address1.as_deref(), Some("Rechnungsweg 1"));
        assert_eq!(company.bill_to_city.as_deref(), Some("Berlin"));
        assert_eq!(company.bill_to_zip_code.as_deref(), Some("12345"));
    }

    #[test]
    fn test_map_company_rejects_missing_name() {
        let mut contact = create_test_contact();
        contact.name = "  ".to_string();

        let result = MappingService::map_company(&contact, &defaults());

        assert!(matches!(result, Err(SyncError::Validation(_))));
    }

    #[test]
    fn test_map_company_rejects_archived_contact() {
        let mut contact = create_test_contact();
        contact.archived = true;

        let result = MappingService::map_company(&contact, &defaults());

        assert!(matches!(result, Err(SyncError::Validation(_))));
    }

    #[test]
    fn test_map_contacts_skips_nameless_persons() {
        let persons = vec![
            ContactPerson {
                salutation: None,
                first_name: Some("Max".to_string()),
                last_name: None,
                primary: true,
                email_address: None,
                phone_number: None,
            },
            ContactPerson {
                salutation: None,
                first_name: None,
                last_name: None,
                primary: false,
                email_address: Some("orphan@acme.example".to_string()),
                phone_number: None,
            },
        ];

        let contacts = MappingService::map_contacts(&persons);

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].first_name, "Max");
        assert!(contacts[0].primary_contact);
    }

    #[test]
    fn test_example_from_documentation() {
        // SourceCompany{name="Acme GmbH", phone=None} with default
        // phone "+49-000" maps to a company carrying the default.
        let mut contact = create_test_contact();
        contact.phone_numbers.clear();

        let company = MappingService::map_company(&contact, &defaults()).unwrap();

        assert_eq!(company.company_name, "Acme GmbH");
        assert_eq!(company.phone, "+49-000");
        assert_eq!(company.owner_resource_id, defaults().owner_resource_id);
    }
}
