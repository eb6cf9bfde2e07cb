//! Built-in dashboard-icons taxonomy tables.

use crate::category::CategoryId;

/// Checked before any keyword, in this order.
pub(super) const SPECIFIC_APPS: [(&str, CategoryId); 80] = [
    ("home-assistant", CategoryId::Automation),
    ("homeassistant", CategoryId::Automation),
    ("hass", CategoryId::Automation),
    ("frigate", CategoryId::Automation),
    ("scrypted", CategoryId::Automation),
    ("wyze", CategoryId::Automation),
    ("ring", CategoryId::Automation),
    ("nest", CategoryId::Automation),
    ("ecobee", CategoryId::Automation),
    ("sonoff", CategoryId::Automation),
    ("shelly", CategoryId::Automation),
    ("tuya", CategoryId::Automation),
    ("zigbee2mqtt", CategoryId::Automation),
    ("zwave-js", CategoryId::Automation),
    ("zwavejs", CategoryId::Automation),
    ("node-red", CategoryId::Automation),
    ("nodered", CategoryId::Automation),
    ("n8n", CategoryId::Automation),
    ("mosquitto", CategoryId::Automation),
    ("minecraft", CategoryId::Media),
    ("valheim", CategoryId::Media),
    ("terraria", CategoryId::Media),
    ("factorio", CategoryId::Media),
    ("satisfactory", CategoryId::Media),
    ("ark", CategoryId::Media),
    ("rust-game", CategoryId::Media),
    ("csgo", CategoryId::Media),
    ("steam", CategoryId::Media),
    ("epic-games", CategoryId::Media),
    ("gog", CategoryId::Media),
    ("lutris", CategoryId::Media),
    ("heroic", CategoryId::Media),
    ("playnite", CategoryId::Media),
    ("retroarch", CategoryId::Media),
    ("emulationstation", CategoryId::Media),
    ("launchbox", CategoryId::Media),
    ("pterodactyl", CategoryId::Media),
    ("crafty", CategoryId::Media),
    ("amp", CategoryId::Media),
    ("libreoffice", CategoryId::Development),
    ("onlyoffice", CategoryId::Development),
    ("collabora", CategoryId::Development),
    ("cryptpad", CategoryId::Development),
    ("etherpad", CategoryId::Development),
    ("hedgedoc", CategoryId::Development),
    ("codimd", CategoryId::Development),
    ("hackmd", CategoryId::Development),
    ("outline", CategoryId::Development),
    ("wiki-js", CategoryId::Development),
    ("bookstack", CategoryId::Development),
    ("docusaurus", CategoryId::Development),
    ("mkdocs", CategoryId::Development),
    ("hugo", CategoryId::Development),
    ("ghost", CategoryId::Development),
    ("homarr", CategoryId::Monitoring),
    ("homer", CategoryId::Monitoring),
    ("dashy", CategoryId::Monitoring),
    ("heimdall", CategoryId::Monitoring),
    ("organizr", CategoryId::Monitoring),
    ("flame", CategoryId::Monitoring),
    ("muximux", CategoryId::Monitoring),
    ("sui", CategoryId::Monitoring),
    ("firefly", CategoryId::Development),
    ("actual-budget", CategoryId::Development),
    ("gnucash", CategoryId::Development),
    ("beancount", CategoryId::Development),
    ("ollama", CategoryId::Development),
    ("openai", CategoryId::Development),
    ("chatgpt", CategoryId::Development),
    ("anthropic", CategoryId::Development),
    ("claude", CategoryId::Development),
    ("stable-diffusion", CategoryId::Development),
    ("automatic1111", CategoryId::Development),
    ("comfyui", CategoryId::Development),
    ("invoke-ai", CategoryId::Development),
    ("text-generation", CategoryId::Development),
    ("koboldai", CategoryId::Development),
    ("oobabooga", CategoryId::Development),
    ("localai", CategoryId::Development),
    ("anything-llm", CategoryId::Development),
];

/// Category order is the tie-break: an icon matching keywords of two
/// categories lands in the one listed first.
pub(super) const CATEGORY_KEYWORDS: [(CategoryId, &[&str]); 15] = [
    (
        CategoryId::Os,
        &[
            "linux", "ubuntu", "debian", "fedora", "arch", "alpine", "centos", "redhat",
            "windows", "macos", "android", "ios", "freebsd", "openbsd", "mint", "manjaro",
            "kali", "parrot", "pop-os", "elementary", "zorin", "alma", "rocky", "nixos",
            "gentoo", "slackware", "suse", "opensuse", "oracle-linux", "chromeos", "tails",
            "qubes", "haiku", "reactos", "freenas", "truenas", "openmediavault",
        ],
    ),
    (
        CategoryId::Cloud,
        &[
            "aws", "amazon-web", "azure", "gcp", "google-cloud", "cloudflare", "digitalocean",
            "linode", "vultr", "hetzner", "ovh", "oracle-cloud", "ibm-cloud", "alibaba",
            "aliyun", "heroku", "vercel", "netlify", "railway", "render", "fly-io", "scaleway",
            "backblaze", "wasabi", "minio", "s3", "cloudwatch", "route53",
        ],
    ),
    (
        CategoryId::Containers,
        &[
            "docker", "kubernetes", "k3s", "k8s", "podman", "containerd", "rancher",
            "portainer", "yacht", "helm", "istio", "linkerd", "traefik", "nginx-proxy", "caddy",
            "haproxy", "envoy", "consul", "nomad", "swarm", "compose", "watchtower", "dozzle",
            "lazydocker",
        ],
    ),
    (
        CategoryId::Virtualization,
        &[
            "proxmox", "vmware", "esxi", "vcenter", "virtualbox", "hyper-v", "qemu", "kvm",
            "xen", "citrix", "ovirt", "openstack", "vagrant", "virt-manager", "cockpit",
            "guacamole",
        ],
    ),
    (
        CategoryId::Databases,
        &[
            "mysql", "mariadb", "postgres", "postgresql", "mongodb", "redis", "sqlite",
            "elasticsearch", "influxdb", "cassandra", "couchdb", "neo4j", "dynamodb",
            "firebird", "cockroachdb", "timescale", "questdb", "clickhouse", "druid", "dgraph",
            "arangodb", "rethinkdb", "memcached", "etcd", "valkey",
        ],
    ),
    (
        CategoryId::Monitoring,
        &[
            "grafana", "prometheus", "zabbix", "nagios", "datadog", "netdata", "uptime",
            "statping", "healthchecks", "gatus", "checkly", "better-stack", "loki", "kibana",
            "logstash", "fluentd", "graylog", "splunk", "sentry", "glances", "monit", "icinga",
            "observium", "librenms", "prtg", "checkmk", "victoria", "alertmanager", "telegraf",
            "collectd", "speedtest",
        ],
    ),
    (
        CategoryId::Media,
        &[
            "plex", "jellyfin", "emby", "kodi", "infuse", "vlc", "mpv", "stremio", "sonarr",
            "radarr", "lidarr", "readarr", "prowlarr", "bazarr", "overseerr", "ombi",
            "tautulli", "audiobookshelf", "calibre", "kavita", "komga", "komf", "mylar",
            "navidrome", "funkwhale", "airsonic", "ampache", "subsonic", "spotify", "youtube",
            "netflix", "disney", "hbo", "amazon-prime", "apple-tv", "tidal", "deezer",
            "soundcloud", "beets", "libreelec", "stash", "dim", "petio", "requestrr", "unmanic",
            "tdarr", "fileflows", "photoprism", "immich", "ente", "lychee", "pigallery",
            "piwigo", "librephotos", "nextcloud-photos",
        ],
    ),
    (
        CategoryId::Downloads,
        &[
            "qbittorrent", "deluge", "transmission", "rtorrent", "rutorrent", "aria2",
            "sabnzbd", "nzbget", "usenet", "newshosting", "jackett", "flaresolverr", "nzbhydra",
            "sickbeard", "sickrage", "sickgear", "medusa", "jdownloader", "pyload",
            "youtube-dl", "yt-dlp", "metube", "tube", "flood", "cross-seed", "autobrr", "1337x",
        ],
    ),
    (
        CategoryId::Security,
        &[
            "vpn", "wireguard", "openvpn", "tailscale", "zerotier", "headscale", "pritunl",
            "softether", "ipsec", "strongswan", "wg-easy", "pi-vpn", "adguard", "pihole",
            "pi-hole", "blocky", "unbound", "dnscrypt", "doh", "dot", "vaultwarden",
            "bitwarden", "keepass", "passbolt", "hashicorp-vault", "2fauth", "authelia",
            "authentik", "keycloak", "dex", "oauth", "ldap", "crowdsec", "fail2ban", "snort",
            "suricata", "wazuh", "ossec", "nessus", "openvas", "1password", "dashlane",
            "lastpass", "nordvpn", "expressvpn", "mullvad", "protonvpn", "surfshark", "certbot",
            "acme", "letsencrypt", "step-ca", "smallstep", "cfssl",
        ],
    ),
    (
        CategoryId::Networking,
        &[
            "nginx", "apache", "caddy", "haproxy", "squid", "pound", "varnish", "cloudflare",
            "route53", "bind", "powerdns", "coredns", "dnsmasq", "technitium", "pihole",
            "adguard-home", "blocky", "unifi", "omada", "opnsense", "pfsense", "openwrt",
            "ddwrt", "mikrotik", "ubiquiti", "netgear", "tp-link", "asus", "synology", "qnap",
            "zyxel", "fritzbox", "speedtest", "smokeping", "ntopng", "wireshark", "zeek",
            "snmp", "gophish",
        ],
    ),
    (
        CategoryId::Development,
        &[
            "github", "gitlab", "gitea", "forgejo", "gogs", "bitbucket", "svn", "jenkins",
            "drone", "woodpecker", "buildkite", "circleci", "travis", "teamcity", "bamboo",
            "argocd", "fluxcd", "tekton", "spinnaker", "terraform", "ansible", "puppet", "chef",
            "saltstack", "pulumi", "crossplane", "vault", "consul", "nomad", "waypoint",
            "packer", "vscode", "jetbrains", "intellij", "pycharm", "webstorm", "rider",
            "sublime", "atom", "notepad", "vim", "neovim", "emacs", "helix", "python", "nodejs",
            "node", "npm", "yarn", "pnpm", "deno", "bun", "java", "spring", "maven", "gradle",
            "kotlin", "scala", "clojure", "ruby", "rails", "php", "laravel", "symfony",
            "wordpress", "drupal", "go", "golang", "rust", "cargo", "crates", "swift", "dart",
            "flutter", "react", "vue", "angular", "svelte", "nextjs", "nuxt", "gatsby",
            "webpack", "vite", "rollup", "esbuild", "turbopack", "rspack", "sonarqube", "snyk",
            "trivy", "clair", "grype", "syft", "cosign", "backstage", "port", "cortex",
            "opslevel", "code-server", "eclipse", "swagger", "openapi", "postman", "insomnia",
            "httpie", "curl", "act", "goreleaser", "semantic-release", "changesets", "renovate",
            "dependabot", "greenkeeper", "n8n", "huginn", "activepieces", "windmill",
        ],
    ),
    (
        CategoryId::Communication,
        &[
            "discord", "slack", "teams", "zoom", "jitsi", "matrix", "element", "mattermost",
            "rocket-chat", "rocketchat", "zulip", "revolt", "gotify", "ntfy", "pushover",
            "telegram", "signal", "whatsapp", "messenger", "skype", "viber", "wechat", "email",
            "smtp", "imap", "postfix", "dovecot", "roundcube", "mailcow", "mailu", "iredmail",
            "zimbra", "mailpile", "thunderbird", "outlook", "gmail", "protonmail", "tutanota",
            "fastmail", "mailchimp", "sendgrid", "mailgun", "rspamd", "spamassassin", "clamav",
            "amavis", "sogo", "kopano", "horde",
        ],
    ),
    (
        CategoryId::Storage,
        &[
            "nextcloud", "owncloud", "seafile", "syncthing", "resilio", "sparkleshare",
            "filebrowser", "filestash", "cloudreve", "alist", "chevereto", "lychee", "nas",
            "freenas", "truenas", "openmediavault", "unraid", "xpenology", "synology", "qnap",
            "asustor", "drobo", "buffalo", "samba", "smb", "nfs", "cifs", "webdav", "sftp",
            "ftp", "rsync", "rclone", "duplicati", "borgbackup", "borg", "restic", "kopia",
            "duplicacy", "urbackup", "bacula", "bareos", "amanda", "veeam", "acronis",
            "crashplan", "backblaze", "carbonite", "idrive", "wasabi", "arq", "timeshift",
            "snapper", "proxmox-backup", "pbs", "minio", "ceph", "glusterfs", "longhorn",
            "rook", "paperless", "paperless-ng", "paperless-ngx", "mayan-edms", "docspell",
        ],
    ),
    (
        CategoryId::Hardware,
        &[
            "raspberry", "pi", "arduino", "esp", "nvidia", "amd", "intel", "asus", "msi",
            "gigabyte", "asrock", "hp", "dell", "lenovo", "thinkpad", "macbook", "imac", "cpu",
            "gpu", "ram", "ssd", "hdd", "nvme", "usb", "thunderbolt", "printer", "scanner",
            "ups", "apc", "cyberpower", "tripplite", "ipmi", "ilo", "idrac", "bmc", "ikvm",
            "pikvm",
        ],
    ),
    (
        CategoryId::Automation,
        &[
            "home-assistant", "homeassistant", "hass", "openhab", "domoticz", "homebridge",
            "hubitat", "smartthings", "node-red", "nodered", "n8n", "huginn", "activepieces",
            "zigbee", "z-wave", "mqtt", "mosquitto", "esphome", "tasmota", "iot", "frigate",
            "scrypted", "wyze", "ring", "nest", "ecobee", "sonoff", "shelly", "tuya",
            "zigbee2mqtt", "zwave-js", "zwavejs", "deconz", "conbee", "double-take",
            "compreface",
        ],
    ),
];
