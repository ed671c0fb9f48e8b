mod reports_launcher_dir_problems_contract;
